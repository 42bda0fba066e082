use serde::{Deserialize, Serialize};

use super::super::domain::{Dimension, Rule};
use super::super::rules::lookup_rule;

/// Fixed four-tier risk classification used when no administrator rule
/// matches a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Baixo,
    Medio,
    Moderado,
    Alto,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Baixo => "baixo",
            RiskBand::Medio => "médio",
            RiskBand::Moderado => "moderado",
            RiskBand::Alto => "alto",
        }
    }
}

/// Classifies an average into the fixed fallback bands.
///
/// The two polarity tables are exact mirror images of each other across the
/// 0-4 scale: `fallback_band(a, true) == fallback_band(4 - a, false)`. This
/// symmetry is the business rule separating more-is-worse dimensions
/// (Demandas) from more-is-better ones (Apoio), and must hold at every
/// boundary.
pub fn fallback_band(average: f64, is_positive: bool) -> RiskBand {
    if is_positive {
        if average >= 3.0 {
            RiskBand::Baixo
        } else if average >= 2.0 {
            RiskBand::Medio
        } else if average >= 1.0 {
            RiskBand::Moderado
        } else {
            RiskBand::Alto
        }
    } else if average <= 1.0 {
        RiskBand::Baixo
    } else if average <= 2.0 {
        RiskBand::Medio
    } else if average <= 3.0 {
        RiskBand::Moderado
    } else {
        RiskBand::Alto
    }
}

/// Risk label for a dimension average: the matching rule's custom text when
/// one exists, otherwise the fallback band label.
pub fn classify(rules: &[Rule], dimension: &Dimension, average: f64) -> String {
    match lookup_rule(rules, dimension.id, average) {
        Some(rule) => rule.custom_text.clone(),
        None => fallback_band(average, dimension.is_positive)
            .label()
            .to_string(),
    }
}
