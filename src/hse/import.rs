use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::domain::{Answer, QuestionId};

/// Error raised while ingesting an answers export.
#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answers export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answers CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unparseable timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: i64,
    #[serde(rename = "Respondent")]
    respondent: String,
    #[serde(
        rename = "Answer Text",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    answer_text: Option<String>,
    #[serde(rename = "Answer Number", default)]
    answer_number: Option<f64>,
    #[serde(rename = "Created At")]
    created_at: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc());
    }

    None
}

/// Bulk CSV ingestion of submitted answers.
///
/// Expected headers: `Question ID`, `Respondent`, `Answer Text`,
/// `Answer Number`, `Created At`. Timestamps accept RFC 3339 or a bare
/// `YYYY-MM-DD` date.
pub struct AnswerCsvImporter;

impl AnswerCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Answer>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Answer>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = Vec::new();
        for (index, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            let row = record?;
            let created_at = parse_timestamp(&row.created_at).ok_or_else(|| {
                AnswerImportError::InvalidTimestamp {
                    row: index + 1,
                    value: row.created_at.clone(),
                }
            })?;

            answers.push(Answer {
                question_id: QuestionId(row.question_id),
                answer_text: row.answer_text,
                answer_number: row.answer_number,
                respondent: row.respondent,
                created_at,
            });
        }

        Ok(answers)
    }
}
