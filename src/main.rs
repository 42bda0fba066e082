use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use hse_insights::config::AppConfig;
use hse_insights::error::AppError;
use hse_insights::hse::report::views::{Emphasis, HseReport, SectionBody, TextSpan};
use hse_insights::hse::sample::sample_dataset;
use hse_insights::hse::{compose_from_dataset, hse_router, AnswerCsvImporter, ComposeRequest};
use hse_insights::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "HSE Insights",
    about = "Compute psychosocial-risk diagnostics and reports from survey answers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// HSE diagnostic utilities
    Hse {
        #[command(subcommand)]
        command: HseCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum HseCommand {
    /// Render a diagnostic report to stdout
    Report(HseReportArgs),
}

#[derive(Args, Debug)]
struct HseReportArgs {
    /// JSON dataset file (dimensions, rules, questions, answers, narratives);
    /// defaults to a built-in demonstration dataset
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// CSV answers export replacing the dataset's answers
    #[arg(long)]
    answers_csv: Option<PathBuf>,
    /// Emit the composed report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Hse {
            command: HseCommand::Report(args),
        } => run_hse_report(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(hse_router())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%config.environment, %addr, "hse diagnostics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_hse_report(args: HseReportArgs) -> Result<(), AppError> {
    // stdout belongs to the rendered report; logs go to stderr
    telemetry::init_quiet()?;

    let HseReportArgs {
        dataset,
        answers_csv,
        json,
    } = args;

    let mut request: ComposeRequest = match dataset {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(file)?
        }
        None => sample_dataset(),
    };

    if let Some(path) = answers_csv {
        request.answers = AnswerCsvImporter::from_path(path)?;
    }

    let report = compose_from_dataset(&request);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_hse_report(&request.instrument_name, &report);
    }
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_hse_report(instrument_name: &str, report: &HseReport) {
    println!("Diagnóstico HSE: {instrument_name}");

    for section in &report.sections {
        println!("\n{}. {}", section.number, section.title);
        match &section.body {
            SectionBody::Introduction { text } => println!("{text}"),
            SectionBody::Methodology {
                scale,
                positive_bands,
                negative_bands,
            } => {
                println!("Escala de respostas:");
                for entry in scale {
                    println!("  {} = {}", entry.ordinal, entry.meaning);
                }
                println!("Faixas (dimensões positivas):");
                for band in positive_bands {
                    println!("  {} -> {}", band.range, band.label);
                }
                println!("Faixas (dimensões negativas):");
                for band in negative_bands {
                    println!("  {} -> {}", band.range, band.label);
                }
            }
            SectionBody::ItemDiagnostics { groups } => {
                for group in groups {
                    println!("{}", group.dimension_name);
                    for item in &group.items {
                        let number = item
                            .question_number
                            .map(|value| value.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!(
                            "  {} | {} | {} | média {}",
                            number, item.question_text, item.risk_label, item.mean_display
                        );
                    }
                }
            }
            SectionBody::DimensionResults { rows } => {
                for row in rows {
                    println!(
                        "- {} | risco {} | média {}",
                        row.name, row.risk_label, row.average_display
                    );
                }
            }
            SectionBody::Narrative { spans } => println!("{}", render_spans(spans)),
        }
    }

    println!("\n________________________________");
    println!("{}", report.signature.name);
    if !report.signature.registration.is_empty() {
        println!("{}", report.signature.registration);
    }
}

fn render_spans(spans: &[TextSpan]) -> String {
    spans
        .iter()
        .map(|span| match span.emphasis {
            Emphasis::Plain => span.text.clone(),
            Emphasis::Bold => format!("**{}**", span.text),
            Emphasis::Highlight => format!("[{}]", span.text),
        })
        .collect()
}
