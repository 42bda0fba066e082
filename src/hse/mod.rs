//! Psychosocial-risk (HSE) diagnostic core.
//!
//! Raw answers plus question/dimension metadata flow through the scoring
//! engine into diagnostic records, which the report composer assembles into
//! a fixed 7-section document. The rule table and dimension registry are
//! reference data consulted during classification and edited through an
//! isolated session committed in one batch.

pub mod domain;
pub mod import;
pub mod registry;
pub mod report;
pub mod repository;
pub mod router;
pub mod rules;
pub mod sample;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, DiagnosticItem, Dimension, DimensionId, DimensionSummary, Question, QuestionId,
    QuestionType, Rule, RuleId,
};
pub use import::{AnswerCsvImporter, AnswerImportError};
pub use registry::DimensionRegistry;
pub use report::{compose, compose_from_dataset, ComposeRequest, Narratives, Responsible};
pub use repository::{DimensionPatch, HseRepository, InMemoryHseRepository, StoreError};
pub use router::hse_router;
pub use rules::{lookup_rule, RuleEditSession, RuleField};
pub use scoring::{
    compute_diagnostics, dimension_summary, fallback_band, question_average,
    split_strengths_weaknesses, summarize_dimensions, RiskBand, StrengthsWeaknesses,
};
