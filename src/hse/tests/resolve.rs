use super::common::*;
use crate::hse::scoring::resolve_ordinal;

#[test]
fn number_within_scale_is_used_directly() {
    let question = rating_question(1, None, None);
    let answer = numeric_answer(1, "ana", 2.0);

    assert_eq!(resolve_ordinal(&question, &answer), Some(2.0));
}

#[test]
fn number_outside_scale_falls_through_to_text() {
    let question = likert_question(1, None, None);
    let mut answer = text_answer(1, "ana", "sempre");
    answer.answer_number = Some(7.0);

    assert_eq!(resolve_ordinal(&question, &answer), Some(4.0));
}

#[test]
fn option_labels_map_positionally_to_ordinals() {
    let mut question = likert_question(1, None, None);
    question.options = vec![
        "discordo totalmente".to_string(),
        "discordo".to_string(),
        "neutro".to_string(),
        "concordo".to_string(),
        "concordo totalmente".to_string(),
    ];
    let answer = text_answer(1, "ana", "concordo");

    assert_eq!(resolve_ordinal(&question, &answer), Some(3.0));
}

#[test]
fn option_label_match_is_trimmed_and_case_insensitive() {
    let question = likert_question(1, None, None);
    let answer = text_answer(1, "ana", "  Raramente ");

    assert_eq!(resolve_ordinal(&question, &answer), Some(1.0));
}

#[test]
fn likert_vocabulary_matches_with_and_without_accent() {
    let question = rating_question(1, None, None);

    assert_eq!(
        resolve_ordinal(&question, &text_answer(1, "ana", "às vezes")),
        Some(2.0)
    );
    assert_eq!(
        resolve_ordinal(&question, &text_answer(1, "ana", "as vezes")),
        Some(2.0)
    );
    assert_eq!(
        resolve_ordinal(&question, &text_answer(1, "ana", "nunca")),
        Some(0.0)
    );
    assert_eq!(
        resolve_ordinal(&question, &text_answer(1, "ana", " Frequentemente ")),
        Some(3.0)
    );
}

#[test]
fn question_options_take_precedence_over_likert_vocabulary() {
    // "sempre" sits at position 4 in the Likert vocabulary but position 0
    // when the question defines it as its first option label.
    let mut question = likert_question(1, None, None);
    question.options = vec!["sempre".to_string(), "nunca".to_string()];
    let answer = text_answer(1, "ana", "sempre");

    assert_eq!(resolve_ordinal(&question, &answer), Some(0.0));
}

#[test]
fn unmapped_text_is_unresolvable() {
    let question = likert_question(1, None, None);

    assert_eq!(resolve_ordinal(&question, &text_answer(1, "ana", "não sei")), None);
    assert_eq!(resolve_ordinal(&question, &text_answer(1, "ana", "")), None);
}

#[test]
fn answer_with_no_value_at_all_is_unresolvable() {
    let question = likert_question(1, None, None);
    let mut answer = text_answer(1, "ana", "x");
    answer.answer_text = None;

    assert_eq!(resolve_ordinal(&question, &answer), None);
}
