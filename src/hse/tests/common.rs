use chrono::{TimeZone, Utc};

use crate::hse::domain::{
    Answer, Dimension, DimensionId, Question, QuestionId, QuestionType, Rule, RuleId,
};

pub(super) fn dimension(id: i64, name: &str, is_positive: bool) -> Dimension {
    Dimension {
        id: DimensionId(id),
        name: name.to_string(),
        is_positive,
    }
}

pub(super) fn likert_options() -> Vec<String> {
    ["nunca", "raramente", "às vezes", "frequentemente", "sempre"]
        .iter()
        .map(|option| option.to_string())
        .collect()
}

pub(super) fn likert_question(id: i64, dimension: Option<i64>, number: Option<u32>) -> Question {
    Question {
        id: QuestionId(id),
        label: format!("Questão {id}"),
        question_type: QuestionType::SingleChoice,
        required: true,
        options: likert_options(),
        min_value: None,
        max_value: None,
        dimension_id: dimension.map(DimensionId),
        number_in_dimension: number,
        report_title: None,
        action_plan_item: None,
    }
}

pub(super) fn rating_question(id: i64, dimension: Option<i64>, number: Option<u32>) -> Question {
    Question {
        id: QuestionId(id),
        label: format!("Questão {id}"),
        question_type: QuestionType::Rating,
        required: true,
        options: Vec::new(),
        min_value: Some(0.0),
        max_value: Some(4.0),
        dimension_id: dimension.map(DimensionId),
        number_in_dimension: number,
        report_title: None,
        action_plan_item: None,
    }
}

pub(super) fn section_break(id: i64, dimension: Option<i64>) -> Question {
    Question {
        id: QuestionId(id),
        label: format!("Seção {id}"),
        question_type: QuestionType::SectionBreak,
        required: false,
        options: Vec::new(),
        min_value: None,
        max_value: None,
        dimension_id: dimension.map(DimensionId),
        number_in_dimension: None,
        report_title: None,
        action_plan_item: None,
    }
}

pub(super) fn text_answer(question: i64, respondent: &str, text: &str) -> Answer {
    Answer {
        question_id: QuestionId(question),
        answer_text: Some(text.to_string()),
        answer_number: None,
        respondent: respondent.to_string(),
        created_at: timestamp(),
    }
}

pub(super) fn numeric_answer(question: i64, respondent: &str, value: f64) -> Answer {
    Answer {
        question_id: QuestionId(question),
        answer_text: None,
        answer_number: Some(value),
        respondent: respondent.to_string(),
        created_at: timestamp(),
    }
}

pub(super) fn rule(id: i64, dimension: i64, min: f64, max: f64, text: &str) -> Rule {
    Rule {
        id: RuleId(id),
        dimension_id: DimensionId(dimension),
        min_val: min,
        max_val: max,
        custom_text: text.to_string(),
        interpretive_feedback: None,
        suggested_action_plan: None,
    }
}

fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 10, 9, 0, 0)
        .single()
        .expect("valid test timestamp")
}
