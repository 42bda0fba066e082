use std::cmp::Ordering;

use tracing::debug;

use super::domain::{DimensionId, Rule, RuleId};
use super::repository::{HseRepository, StoreError};

/// Finds the rule classifying `average` for a dimension.
///
/// Rules are scanned in ascending `min_val` order and the first band whose
/// inclusive `[min_val, max_val]` range contains the average wins. Gaps and
/// overlaps are tolerated; callers fall back to the fixed bands when this
/// returns `None`.
pub fn lookup_rule(
    rules: &[Rule],
    dimension_id: DimensionId,
    average: f64,
) -> Option<&Rule> {
    let mut candidates: Vec<&Rule> = rules
        .iter()
        .filter(|rule| rule.dimension_id == dimension_id)
        .collect();
    candidates.sort_by(|a, b| {
        a.min_val
            .partial_cmp(&b.min_val)
            .unwrap_or(Ordering::Equal)
    });
    candidates
        .into_iter()
        .find(|rule| rule.min_val <= average && average <= rule.max_val)
}

/// Field-wise patch applied to a rule in the working copy.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleField {
    MinVal(f64),
    MaxVal(f64),
    CustomText(String),
    InterpretiveFeedback(Option<String>),
    SuggestedActionPlan(Option<String>),
}

/// Isolated working copy of one dimension's rule table.
///
/// Additions and deletions are staged locally and only reach the store on
/// `commit`, where deletions are applied before upserts so reused identifiers
/// cannot collide. The authoritative collection is never mutated before
/// commit.
#[derive(Debug)]
pub struct RuleEditSession {
    dimension_id: DimensionId,
    draft: Vec<Rule>,
    pending_deletes: Vec<RuleId>,
    next_draft_id: i64,
}

impl RuleEditSession {
    /// Opens a session over the dimension's currently persisted rules.
    pub fn open<R: HseRepository>(
        repository: &R,
        dimension_id: DimensionId,
    ) -> Result<Self, StoreError> {
        let mut draft = repository.rules(Some(dimension_id))?;
        draft.sort_by(|a, b| {
            a.min_val
                .partial_cmp(&b.min_val)
                .unwrap_or(Ordering::Equal)
        });
        Ok(Self {
            dimension_id,
            draft,
            pending_deletes: Vec::new(),
            next_draft_id: -1,
        })
    }

    pub fn dimension_id(&self) -> DimensionId {
        self.dimension_id
    }

    /// Current working copy, drafts included.
    pub fn rules(&self) -> &[Rule] {
        &self.draft
    }

    pub fn pending_deletes(&self) -> &[RuleId] {
        &self.pending_deletes
    }

    /// Adds a blank rule with zeroed bounds and a fresh draft (negative) id.
    pub fn add_rule(&mut self) -> &Rule {
        let id = RuleId(self.next_draft_id);
        self.next_draft_id -= 1;
        self.draft.push(Rule {
            id,
            dimension_id: self.dimension_id,
            min_val: 0.0,
            max_val: 0.0,
            custom_text: String::new(),
            interpretive_feedback: None,
            suggested_action_plan: None,
        });
        self.draft.last().expect("rule just pushed")
    }

    pub fn update_rule(&mut self, id: RuleId, field: RuleField) -> Result<(), StoreError> {
        let rule = self
            .draft
            .iter_mut()
            .find(|rule| rule.id == id)
            .ok_or(StoreError::NotFound)?;
        match field {
            RuleField::MinVal(value) => rule.min_val = value,
            RuleField::MaxVal(value) => rule.max_val = value,
            RuleField::CustomText(value) => rule.custom_text = value,
            RuleField::InterpretiveFeedback(value) => rule.interpretive_feedback = value,
            RuleField::SuggestedActionPlan(value) => rule.suggested_action_plan = value,
        }
        Ok(())
    }

    /// Removes a rule from the working set immediately. Persisted rules are
    /// queued for deletion at commit; drafts simply vanish.
    pub fn delete_rule(&mut self, id: RuleId) {
        let before = self.draft.len();
        self.draft.retain(|rule| rule.id != id);
        if before != self.draft.len() && !id.is_draft() {
            self.pending_deletes.push(id);
        }
    }

    /// Commits the session as one batch: deletes first, then upserts.
    /// Returns the stored rules with store-assigned ids for former drafts.
    pub fn commit<R: HseRepository>(self, repository: &R) -> Result<Vec<Rule>, StoreError> {
        debug!(
            dimension = self.dimension_id.0,
            deletes = self.pending_deletes.len(),
            upserts = self.draft.len(),
            "committing rule edit session"
        );
        if !self.pending_deletes.is_empty() {
            repository.delete_rules(&self.pending_deletes)?;
        }
        repository.upsert_rules(&self.draft)
    }
}
