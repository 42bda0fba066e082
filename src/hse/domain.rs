use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for risk dimensions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DimensionId(pub i64);

/// Identifier wrapper for survey questions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct QuestionId(pub i64);

/// Identifier wrapper for classification rules. Negative values denote draft
/// rules created inside an edit session and not yet persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RuleId(pub i64);

impl RuleId {
    pub const fn is_draft(self) -> bool {
        self.0 < 0
    }
}

/// A named axis of psychosocial risk (e.g., Demandas, Controle).
///
/// `is_positive` fixes the polarity for the dimension's lifetime: when true,
/// a higher average score means a better (lower-risk) outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: String,
    pub is_positive: bool,
}

/// Question rendering/answering modes supported by the form editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortText,
    LongText,
    SingleChoice,
    Dropdown,
    Rating,
    SectionBreak,
}

impl QuestionType {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionType::ShortText => "short_text",
            QuestionType::LongText => "long_text",
            QuestionType::SingleChoice => "single_choice",
            QuestionType::Dropdown => "dropdown",
            QuestionType::Rating => "rating",
            QuestionType::SectionBreak => "section_break",
        }
    }

    /// Section breaks are layout markers with no answerable semantics.
    pub const fn is_scorable(self) -> bool {
        !matches!(self, QuestionType::SectionBreak)
    }
}

/// A survey question, optionally associated to a risk dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub label: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub required: bool,
    /// Up to five option labels for choice/dropdown types, positionally
    /// mapped to ordinals 0..=4 during scoring.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub dimension_id: Option<DimensionId>,
    #[serde(default)]
    pub number_in_dimension: Option<u32>,
    #[serde(default)]
    pub report_title: Option<String>,
    #[serde(default)]
    pub action_plan_item: Option<String>,
}

impl Question {
    /// Text shown for this question in the report, falling back to the label.
    pub fn report_text(&self) -> &str {
        self.report_title.as_deref().unwrap_or(&self.label)
    }
}

/// An administrator-defined numeric band mapping a dimension average to a
/// custom risk label and optional narrative text. Bounds are inclusive on the
/// 0-4 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub dimension_id: DimensionId,
    pub min_val: f64,
    pub max_val: f64,
    pub custom_text: String,
    #[serde(default)]
    pub interpretive_feedback: Option<String>,
    #[serde(default)]
    pub suggested_action_plan: Option<String>,
}

/// A single submitted answer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    #[serde(default)]
    pub answer_text: Option<String>,
    #[serde(default)]
    pub answer_number: Option<f64>,
    pub respondent: String,
    pub created_at: DateTime<Utc>,
}

/// Computed per-question result feeding the report. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    pub dimension_id: DimensionId,
    pub dimension_name: String,
    pub question_number: Option<u32>,
    pub question_text: String,
    pub mean: f64,
    pub risk_label: String,
}

/// Consolidated per-dimension result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    pub dimension_id: DimensionId,
    pub name: String,
    pub is_positive: bool,
    pub average: f64,
    pub risk_label: String,
}

impl DimensionSummary {
    /// Performance on a shared better-is-higher scale: negative-polarity
    /// dimensions are inverted onto it.
    pub fn performance(&self) -> f64 {
        if self.is_positive {
            self.average
        } else {
            5.0 - self.average
        }
    }
}
