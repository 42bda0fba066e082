use super::super::domain::{Answer, Question};

/// Maximum ordinal on the answer scale.
pub const SCALE_MAX: f64 = 4.0;

/// Resolves an answer to its ordinal position on the 0-4 scale.
///
/// Resolution steps are tried in order, first match wins:
/// 1. `answer_number` already within [0, 4];
/// 2. `answer_text` matched against the question's own option labels,
///    positionally mapped to 0..=4;
/// 3. `answer_text` matched against the fixed Likert vocabulary.
///
/// Unresolvable answers return `None` and are excluded from averages, never
/// counted as zero.
pub fn resolve_ordinal(question: &Question, answer: &Answer) -> Option<f64> {
    from_number(answer)
        .or_else(|| from_option_label(question, answer))
        .or_else(|| from_likert(answer))
}

pub(crate) fn from_number(answer: &Answer) -> Option<f64> {
    answer
        .answer_number
        .filter(|value| (0.0..=SCALE_MAX).contains(value))
}

pub(crate) fn from_option_label(question: &Question, answer: &Answer) -> Option<f64> {
    let normalized = normalize(answer.answer_text.as_deref()?);
    if normalized.is_empty() {
        return None;
    }
    question
        .options
        .iter()
        .take(5)
        .position(|option| normalize(option) == normalized)
        .map(|index| index as f64)
}

pub(crate) fn from_likert(answer: &Answer) -> Option<f64> {
    let ordinal = match normalize(answer.answer_text.as_deref()?).as_str() {
        "nunca" => 0.0,
        "raramente" => 1.0,
        "às vezes" | "as vezes" => 2.0,
        "frequentemente" => 3.0,
        "sempre" => 4.0,
        _ => return None,
    };
    Some(ordinal)
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
