use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{
    Answer, DiagnosticItem, Dimension, DimensionSummary, Question, QuestionId, Rule,
};
use super::classify::classify;
use super::resolve::resolve_ordinal;

/// Dimensions bucketed for the interpretive view, each list sorted
/// descending by performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthsWeaknesses {
    pub strengths: Vec<DimensionSummary>,
    pub weaknesses: Vec<DimensionSummary>,
}

/// Mean of all resolvable answer ordinals for one question.
///
/// Returns `None` for section breaks and for questions where no answer
/// resolves; unresolvable answers are excluded from both numerator and
/// denominator.
pub fn question_average(question: &Question, answers: &[&Answer]) -> Option<f64> {
    if !question.question_type.is_scorable() {
        return None;
    }
    let ordinals: Vec<f64> = answers
        .iter()
        .filter(|answer| answer.question_id == question.id)
        .filter_map(|answer| resolve_ordinal(question, answer))
        .collect();
    if ordinals.is_empty() {
        return None;
    }
    Some(ordinals.iter().sum::<f64>() / ordinals.len() as f64)
}

/// Computes the per-item diagnostic dataset, grouped by dimension.
///
/// Items are ordered by (dimension id, question number within dimension,
/// question id). Questions without a dimension association are omitted;
/// section breaks never appear even when carrying a dimension id. A question
/// with no resolvable answers reports a mean of 0.
pub fn compute_diagnostics(
    questions: &[Question],
    answers: &[Answer],
    dimensions: &[Dimension],
    rules: &[Rule],
) -> Vec<DiagnosticItem> {
    let by_question = index_answers(answers);
    let mut ordered_dimensions: Vec<&Dimension> = dimensions.iter().collect();
    ordered_dimensions.sort_by_key(|dimension| dimension.id);

    let mut items = Vec::new();
    for dimension in ordered_dimensions {
        for question in dimension_questions(questions, dimension) {
            let empty = Vec::new();
            let question_answers = by_question.get(&question.id).unwrap_or(&empty);
            let mean = question_average(question, question_answers).unwrap_or(0.0);
            items.push(DiagnosticItem {
                dimension_id: dimension.id,
                dimension_name: dimension.name.clone(),
                question_number: question.number_in_dimension,
                question_text: question.report_text().to_string(),
                mean,
                risk_label: classify(rules, dimension, mean),
            });
        }
    }
    items
}

/// Consolidated result for one dimension.
///
/// The dimension average is the unweighted mean of its per-question
/// averages: each question counts once regardless of how many respondents
/// answered it. A dimension with no resolvable data averages 0 and is
/// classified through the fallback bands.
pub fn dimension_summary(
    dimension: &Dimension,
    questions: &[Question],
    answers: &[Answer],
    rules: &[Rule],
) -> DimensionSummary {
    let by_question = index_answers(answers);
    let scored: Vec<f64> = dimension_questions(questions, dimension)
        .map(|question| {
            let empty = Vec::new();
            let question_answers = by_question.get(&question.id).unwrap_or(&empty);
            question_average(question, question_answers).unwrap_or(0.0)
        })
        .collect();

    let average = if scored.is_empty() {
        0.0
    } else {
        scored.iter().sum::<f64>() / scored.len() as f64
    };

    DimensionSummary {
        dimension_id: dimension.id,
        name: dimension.name.clone(),
        is_positive: dimension.is_positive,
        average,
        risk_label: classify(rules, dimension, average),
    }
}

/// Summaries for every dimension, in stable ascending-id order.
pub fn summarize_dimensions(
    dimensions: &[Dimension],
    questions: &[Question],
    answers: &[Answer],
    rules: &[Rule],
) -> Vec<DimensionSummary> {
    let mut ordered: Vec<&Dimension> = dimensions.iter().collect();
    ordered.sort_by_key(|dimension| dimension.id);
    ordered
        .into_iter()
        .map(|dimension| dimension_summary(dimension, questions, answers, rules))
        .collect()
}

/// Buckets dimensions into strengths and weaknesses for the interpretive
/// view.
///
/// A dimension is a weakness when a positive dimension averages below 2 or a
/// negative one averages above 2. The 2.0 threshold is independent of, and
/// coarser than, the four-band classification. Both buckets are sorted
/// descending by performance.
pub fn split_strengths_weaknesses(summaries: Vec<DimensionSummary>) -> StrengthsWeaknesses {
    let mut ranked = summaries;
    ranked.sort_by(|a, b| {
        b.performance()
            .partial_cmp(&a.performance())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    let (weaknesses, strengths) = ranked.into_iter().partition(|summary| {
        (summary.is_positive && summary.average < 2.0)
            || (!summary.is_positive && summary.average > 2.0)
    });

    StrengthsWeaknesses {
        strengths,
        weaknesses,
    }
}

fn index_answers(answers: &[Answer]) -> HashMap<QuestionId, Vec<&Answer>> {
    let mut by_question: HashMap<QuestionId, Vec<&Answer>> = HashMap::new();
    for answer in answers {
        by_question.entry(answer.question_id).or_default().push(answer);
    }
    by_question
}

fn dimension_questions<'a>(
    questions: &'a [Question],
    dimension: &'a Dimension,
) -> impl Iterator<Item = &'a Question> {
    let mut associated: Vec<&Question> = questions
        .iter()
        .filter(|question| question.question_type.is_scorable())
        .filter(|question| question.dimension_id == Some(dimension.id))
        .collect();
    associated.sort_by_key(|question| {
        (
            question.number_in_dimension.unwrap_or(u32::MAX),
            question.id,
        )
    });
    associated.into_iter()
}
