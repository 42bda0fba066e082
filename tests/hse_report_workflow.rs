use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use hse_insights::hse::report::views::SectionBody;
use hse_insights::hse::sample::sample_dataset;
use hse_insights::hse::{compose_from_dataset, hse_router};
use serde_json::Value;
use tower::ServiceExt;

#[test]
fn sample_dataset_composes_a_full_report() {
    let request = sample_dataset();
    let report = compose_from_dataset(&request);

    assert_eq!(report.sections.len(), 7);

    // Apoio da Chefia averages below 1, so the custom rule band applies
    match &report.sections[3].body {
        SectionBody::DimensionResults { rows } => {
            let apoio = rows
                .iter()
                .find(|row| row.name == "Apoio da Chefia")
                .expect("apoio row present");
            assert_eq!(apoio.risk_label, "Risco crítico");

            let demandas = rows
                .iter()
                .find(|row| row.name == "Demandas")
                .expect("demandas row present");
            assert_eq!(demandas.risk_label, "alto");
        }
        other => panic!("expected dimension results, got {other:?}"),
    }

    // the section break never shows up in the item diagnostics
    match &report.sections[2].body {
        SectionBody::ItemDiagnostics { groups } => {
            let total_items: usize = groups.iter().map(|group| group.items.len()).sum();
            assert_eq!(groups.len(), 3);
            assert_eq!(total_items, 5);
        }
        other => panic!("expected item diagnostics, got {other:?}"),
    }

    assert_eq!(report.signature.name, "Maria Andrade");
}

#[test]
fn composing_twice_yields_identical_reports() {
    let request = sample_dataset();

    let first = compose_from_dataset(&request);
    let second = compose_from_dataset(&request);

    assert_eq!(first, second);
}

#[tokio::test]
async fn report_endpoint_returns_seven_sections() {
    let app = hse_router();
    let payload = serde_json::to_string(&sample_dataset()).expect("dataset serializes");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/hse/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: Value = serde_json::from_slice(&bytes).expect("valid json");

    let sections = body["sections"].as_array().expect("sections array");
    assert_eq!(sections.len(), 7);
    assert_eq!(sections[0]["title"], "Introdução");
    assert_eq!(sections[6]["title"], "Conclusão");
}

#[tokio::test]
async fn diagnostics_endpoint_returns_summaries_and_split() {
    let app = hse_router();
    let dataset = sample_dataset();
    let payload = serde_json::json!({
        "dimensions": dataset.dimensions,
        "rules": dataset.rules,
        "questions": dataset.questions,
        "answers": dataset.answers,
    })
    .to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/hse/diagnostics")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: Value = serde_json::from_slice(&bytes).expect("valid json");

    assert_eq!(body["diagnostics"].as_array().expect("array").len(), 5);
    assert_eq!(body["summaries"].as_array().expect("array").len(), 3);
    let strengths = body["split"]["strengths"].as_array().expect("array");
    let weaknesses = body["split"]["weaknesses"].as_array().expect("array");
    assert_eq!(strengths.len() + weaknesses.len(), 3);
}
