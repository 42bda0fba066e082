use chrono::{TimeZone, Utc};

use super::domain::{
    Answer, Dimension, DimensionId, Question, QuestionId, QuestionType, Rule, RuleId,
};
use super::report::{ComposeRequest, Narratives, Responsible};

const LIKERT: [&str; 5] = ["nunca", "raramente", "às vezes", "frequentemente", "sempre"];

/// Built-in demonstration dataset used by the CLI when no dataset file is
/// provided, covering both polarities and a custom rule band.
pub fn sample_dataset() -> ComposeRequest {
    let dimensions = vec![
        Dimension {
            id: DimensionId(1),
            name: "Demandas".to_string(),
            is_positive: false,
        },
        Dimension {
            id: DimensionId(2),
            name: "Controle".to_string(),
            is_positive: true,
        },
        Dimension {
            id: DimensionId(3),
            name: "Apoio da Chefia".to_string(),
            is_positive: true,
        },
    ];

    let rules = vec![Rule {
        id: RuleId(1),
        dimension_id: DimensionId(3),
        min_val: 0.0,
        max_val: 1.0,
        custom_text: "Risco crítico".to_string(),
        interpretive_feedback: None,
        suggested_action_plan: Some(
            "Estabelecer reuniões individuais quinzenais entre chefia e equipe.".to_string(),
        ),
    }];

    let questions = vec![
        likert_question(1, 1, 1, "Tenho prazos impossíveis de cumprir."),
        likert_question(2, 1, 2, "Preciso trabalhar muito intensamente."),
        likert_question(3, 2, 1, "Posso decidir como realizar meu trabalho."),
        likert_question(4, 2, 2, "Tenho liberdade para fazer pausas."),
        likert_question(5, 3, 1, "Minha chefia me dá o apoio de que preciso."),
        Question {
            id: QuestionId(6),
            label: "Sobre o seu setor".to_string(),
            question_type: QuestionType::SectionBreak,
            required: false,
            options: Vec::new(),
            min_value: None,
            max_value: None,
            dimension_id: None,
            number_in_dimension: None,
            report_title: None,
            action_plan_item: None,
        },
    ];

    let respondents = ["ana", "bruno", "carla"];
    let pattern: [(i64, [&str; 3]); 5] = [
        (1, ["sempre", "frequentemente", "frequentemente"]),
        (2, ["às vezes", "sempre", "frequentemente"]),
        (3, ["às vezes", "raramente", "às vezes"]),
        (4, ["frequentemente", "às vezes", "às vezes"]),
        (5, ["raramente", "nunca", "raramente"]),
    ];

    let mut answers = Vec::new();
    for (question_id, texts) in pattern {
        for (respondent, text) in respondents.iter().zip(texts) {
            answers.push(Answer {
                question_id: QuestionId(question_id),
                answer_text: Some(text.to_string()),
                answer_number: None,
                respondent: respondent.to_string(),
                created_at: Utc
                    .with_ymd_and_hms(2026, 8, 10, 9, 0, 0)
                    .single()
                    .expect("valid sample timestamp"),
            });
        }
    }

    ComposeRequest {
        instrument_name: "HSE Indicator Tool".to_string(),
        dimensions,
        rules,
        questions,
        answers,
        narratives: Narratives {
            interpretive: Some(
                "A dimensão Demandas apresenta o maior nível de exposição, enquanto \
                 Controle se mantém em patamar intermediário. Apoio da Chefia requer \
                 atenção imediata."
                    .to_string(),
            ),
            action_plan: Some(
                "Recomenda-se **revisar a distribuição de tarefas** e instituir \
                 **canais regulares de escuta** entre lideranças e equipes."
                    .to_string(),
            ),
            conclusion: None,
        },
        responsible: Some(Responsible {
            name: "Maria Andrade".to_string(),
            registration: "CRP 06/123456".to_string(),
        }),
    }
}

fn likert_question(id: i64, dimension: i64, number: u32, label: &str) -> Question {
    Question {
        id: QuestionId(id),
        label: label.to_string(),
        question_type: QuestionType::SingleChoice,
        required: true,
        options: LIKERT.iter().map(|option| option.to_string()).collect(),
        min_value: None,
        max_value: None,
        dimension_id: Some(DimensionId(dimension)),
        number_in_dimension: Some(number),
        report_title: None,
        action_plan_item: None,
    }
}
