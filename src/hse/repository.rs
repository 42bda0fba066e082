use std::collections::BTreeMap;
use std::sync::Mutex;

use super::domain::{Dimension, DimensionId, Question, Rule, RuleId};

/// Partial update for a dimension; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionPatch {
    pub name: Option<String>,
    pub is_positive: Option<bool>,
}

/// Storage abstraction over the hosted backend so the registry, rule table,
/// and tests can be exercised in isolation.
pub trait HseRepository: Send + Sync {
    fn dimensions(&self) -> Result<Vec<Dimension>, StoreError>;
    fn insert_dimension(&self, name: &str, is_positive: bool) -> Result<Dimension, StoreError>;
    fn update_dimension(&self, id: DimensionId, patch: DimensionPatch)
        -> Result<Dimension, StoreError>;
    fn delete_dimension(&self, id: DimensionId) -> Result<(), StoreError>;

    fn questions(&self) -> Result<Vec<Question>, StoreError>;
    /// Clears the dimension association on every question referencing `id`,
    /// returning how many questions were unassigned.
    fn clear_dimension_assignment(&self, id: DimensionId) -> Result<usize, StoreError>;

    fn rules(&self, dimension: Option<DimensionId>) -> Result<Vec<Rule>, StoreError>;
    fn delete_rules(&self, ids: &[RuleId]) -> Result<(), StoreError>;
    /// Inserts draft rules (negative ids are replaced with store-assigned
    /// ids) and updates persisted ones, returning the stored rows.
    fn upsert_rules(&self, rules: &[Rule]) -> Result<Vec<Rule>, StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct InMemoryState {
    dimensions: BTreeMap<i64, Dimension>,
    questions: BTreeMap<i64, Question>,
    rules: BTreeMap<i64, Rule>,
    next_dimension_id: i64,
    next_rule_id: i64,
}

/// In-memory repository used by tests and the demo CLI path.
#[derive(Debug, Default)]
pub struct InMemoryHseRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryHseRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(InMemoryState {
                next_dimension_id: 1,
                next_rule_id: 1,
                ..InMemoryState::default()
            }),
        }
    }

    pub fn seed_questions(&self, questions: Vec<Question>) {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        for question in questions {
            state.questions.insert(question.id.0, question);
        }
    }

    pub fn seed_rules(&self, rules: Vec<Rule>) {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        for rule in rules {
            state.next_rule_id = state.next_rule_id.max(rule.id.0 + 1);
            state.rules.insert(rule.id.0, rule);
        }
    }
}

impl HseRepository for InMemoryHseRepository {
    fn dimensions(&self) -> Result<Vec<Dimension>, StoreError> {
        let state = self.state.lock().expect("repository mutex poisoned");
        Ok(state.dimensions.values().cloned().collect())
    }

    fn insert_dimension(&self, name: &str, is_positive: bool) -> Result<Dimension, StoreError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        let id = state.next_dimension_id;
        state.next_dimension_id += 1;
        let dimension = Dimension {
            id: DimensionId(id),
            name: name.to_string(),
            is_positive,
        };
        state.dimensions.insert(id, dimension.clone());
        Ok(dimension)
    }

    fn update_dimension(
        &self,
        id: DimensionId,
        patch: DimensionPatch,
    ) -> Result<Dimension, StoreError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        let dimension = state.dimensions.get_mut(&id.0).ok_or(StoreError::NotFound)?;
        if let Some(name) = patch.name {
            dimension.name = name;
        }
        if let Some(is_positive) = patch.is_positive {
            dimension.is_positive = is_positive;
        }
        Ok(dimension.clone())
    }

    fn delete_dimension(&self, id: DimensionId) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        state
            .dimensions
            .remove(&id.0)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    fn questions(&self) -> Result<Vec<Question>, StoreError> {
        let state = self.state.lock().expect("repository mutex poisoned");
        Ok(state.questions.values().cloned().collect())
    }

    fn clear_dimension_assignment(&self, id: DimensionId) -> Result<usize, StoreError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        let mut cleared = 0;
        for question in state.questions.values_mut() {
            if question.dimension_id == Some(id) {
                question.dimension_id = None;
                question.number_in_dimension = None;
                cleared += 1;
            }
        }
        Ok(cleared)
    }

    fn rules(&self, dimension: Option<DimensionId>) -> Result<Vec<Rule>, StoreError> {
        let state = self.state.lock().expect("repository mutex poisoned");
        Ok(state
            .rules
            .values()
            .filter(|rule| dimension.map_or(true, |id| rule.dimension_id == id))
            .cloned()
            .collect())
    }

    fn delete_rules(&self, ids: &[RuleId]) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        for id in ids {
            state.rules.remove(&id.0);
        }
        Ok(())
    }

    fn upsert_rules(&self, rules: &[Rule]) -> Result<Vec<Rule>, StoreError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        let mut stored = Vec::with_capacity(rules.len());
        for rule in rules {
            let mut rule = rule.clone();
            if rule.id.is_draft() {
                let id = state.next_rule_id;
                state.next_rule_id += 1;
                rule.id = RuleId(id);
            } else if state.rules.contains_key(&rule.id.0) {
                // persisted rule, keep its id
            } else {
                return Err(StoreError::NotFound);
            }
            state.rules.insert(rule.id.0, rule.clone());
            stored.push(rule);
        }
        Ok(stored)
    }
}
