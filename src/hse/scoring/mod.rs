//! Scoring engine: aggregates raw answers into per-question and
//! per-dimension averages and classifies risk.
//!
//! All computation is pure and synchronous over already-fetched collections;
//! re-running on the same snapshot always yields identical output.

mod classify;
mod engine;
mod resolve;

pub use classify::{classify, fallback_band, RiskBand};
pub use engine::{
    compute_diagnostics, dimension_summary, question_average, split_strengths_weaknesses,
    summarize_dimensions, StrengthsWeaknesses,
};
pub use resolve::{resolve_ordinal, SCALE_MAX};
