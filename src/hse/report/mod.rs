mod composer;
pub mod views;

pub use composer::{
    compose, compose_from_dataset, format_score, highlight_dimension_names, normalize_risk_text,
    parse_emphasis, ComposeRequest, Narratives, Responsible, NARRATIVE_PLACEHOLDER,
};
