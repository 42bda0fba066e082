//! HSE Insights: psychosocial-risk diagnostics computed from survey answers.
//!
//! The `hse` module holds the computational core (scoring, classification,
//! report composition); `config`, `telemetry`, and `error` carry the service
//! plumbing around it.

pub mod config;
pub mod error;
pub mod hse;
pub mod telemetry;
