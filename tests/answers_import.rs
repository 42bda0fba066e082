use std::io::Cursor;

use hse_insights::hse::{AnswerCsvImporter, AnswerImportError, QuestionId};

const HEADER: &str = "Question ID,Respondent,Answer Text,Answer Number,Created At\n";

#[test]
fn importer_reads_text_and_numeric_answers() {
    let csv = format!(
        "{HEADER}1,ana,sempre,,2026-08-10T09:00:00Z\n2,bruno,,3,2026-08-10\n"
    );

    let answers = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

    assert_eq!(answers.len(), 2);

    assert_eq!(answers[0].question_id, QuestionId(1));
    assert_eq!(answers[0].respondent, "ana");
    assert_eq!(answers[0].answer_text.as_deref(), Some("sempre"));
    assert_eq!(answers[0].answer_number, None);

    assert_eq!(answers[1].question_id, QuestionId(2));
    assert_eq!(answers[1].answer_text, None);
    assert_eq!(answers[1].answer_number, Some(3.0));
    assert_eq!(
        answers[1].created_at.to_rfc3339(),
        "2026-08-10T00:00:00+00:00"
    );
}

#[test]
fn blank_answer_text_becomes_none() {
    let csv = format!("{HEADER}1,ana,   ,,2026-08-10T09:00:00Z\n");

    let answers = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answer_text, None);
}

#[test]
fn unparseable_timestamp_is_rejected_with_row_context() {
    let csv = format!(
        "{HEADER}1,ana,sempre,,2026-08-10T09:00:00Z\n2,bruno,nunca,,quando deu\n"
    );

    let error = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect_err("import fails");

    match error {
        AnswerImportError::InvalidTimestamp { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "quando deu");
        }
        other => panic!("expected invalid timestamp, got {other:?}"),
    }
}

#[test]
fn malformed_csv_surfaces_a_csv_error() {
    let csv = format!("{HEADER}not-a-number,ana,sempre,,2026-08-10T09:00:00Z\n");

    let error = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect_err("import fails");
    assert!(matches!(error, AnswerImportError::Csv(_)));
}
