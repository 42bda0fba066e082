use serde::{Deserialize, Serialize};

use super::super::domain::{
    Answer, DiagnosticItem, Dimension, DimensionSummary, Question, Rule,
};
use super::super::scoring::{compute_diagnostics, summarize_dimensions};
use super::views::{
    BandRow, DimensionGroup, DimensionResultRow, Emphasis, HseReport, ItemRow, ReportSection,
    ScaleLegendEntry, SectionBody, SignatureBlock, TextSpan,
};

/// Placeholder rendered when a narrative section has no text yet.
pub const NARRATIVE_PLACEHOLDER: &str = "Análise ainda não disponível.";

const FALLBACK_RESPONSIBLE: &str = "Responsável técnico não informado";

/// Free-form narrative inputs for sections 5-7.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narratives {
    #[serde(default)]
    pub interpretive: Option<String>,
    #[serde(default)]
    pub action_plan: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
}

/// Technical responsible party named in the signature block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsible {
    pub name: String,
    pub registration: String,
}

/// Complete dataset for one report view, fetched by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeRequest {
    pub instrument_name: String,
    pub dimensions: Vec<Dimension>,
    pub rules: Vec<Rule>,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub narratives: Narratives,
    #[serde(default)]
    pub responsible: Option<Responsible>,
}

/// Runs the scoring engine over the dataset and composes the report.
pub fn compose_from_dataset(request: &ComposeRequest) -> HseReport {
    let diagnostics = compute_diagnostics(
        &request.questions,
        &request.answers,
        &request.dimensions,
        &request.rules,
    );
    let summaries = summarize_dimensions(
        &request.dimensions,
        &request.questions,
        &request.answers,
        &request.rules,
    );
    compose(
        &request.instrument_name,
        &request.dimensions,
        &diagnostics,
        &summaries,
        &request.narratives,
        request.responsible.as_ref(),
    )
}

/// Assembles the fixed 7-section document.
///
/// Section order never changes; narrative sections render a placeholder when
/// their text is missing rather than being omitted. All risk-label text
/// passes through `normalize_risk_text` here, at the rendering boundary.
pub fn compose(
    instrument_name: &str,
    dimensions: &[Dimension],
    diagnostics: &[DiagnosticItem],
    summaries: &[DimensionSummary],
    narratives: &Narratives,
    responsible: Option<&Responsible>,
) -> HseReport {
    let sections = vec![
        ReportSection {
            number: 1,
            title: "Introdução".to_string(),
            body: SectionBody::Introduction {
                text: introduction_text(instrument_name),
            },
        },
        ReportSection {
            number: 2,
            title: "Metodologia".to_string(),
            body: methodology(),
        },
        ReportSection {
            number: 3,
            title: "Diagnóstico por item".to_string(),
            body: SectionBody::ItemDiagnostics {
                groups: group_items(diagnostics),
            },
        },
        ReportSection {
            number: 4,
            title: "Resultado por dimensão".to_string(),
            body: SectionBody::DimensionResults {
                rows: summaries
                    .iter()
                    .map(|summary| DimensionResultRow {
                        name: summary.name.clone(),
                        risk_label: normalize_risk_text(&summary.risk_label),
                        average: summary.average,
                        average_display: format_score(summary.average),
                    })
                    .collect(),
            },
        },
        ReportSection {
            number: 5,
            title: "Análise interpretativa".to_string(),
            body: SectionBody::Narrative {
                spans: match narratives.interpretive.as_deref() {
                    Some(text) => highlight_dimension_names(text, dimensions),
                    None => vec![TextSpan::plain(NARRATIVE_PLACEHOLDER)],
                },
            },
        },
        ReportSection {
            number: 6,
            title: "Plano de ação".to_string(),
            body: SectionBody::Narrative {
                spans: match narratives.action_plan.as_deref() {
                    Some(text) => parse_emphasis(text),
                    None => vec![TextSpan::plain(NARRATIVE_PLACEHOLDER)],
                },
            },
        },
        ReportSection {
            number: 7,
            title: "Conclusão".to_string(),
            body: SectionBody::Narrative {
                spans: match narratives.conclusion.as_deref() {
                    Some(text) => vec![TextSpan::plain(text)],
                    None => vec![TextSpan::plain(NARRATIVE_PLACEHOLDER)],
                },
            },
        },
    ];

    let signature = match responsible {
        Some(responsible) => SignatureBlock {
            name: responsible.name.clone(),
            registration: responsible.registration.clone(),
        },
        None => SignatureBlock {
            name: FALLBACK_RESPONSIBLE.to_string(),
            registration: String::new(),
        },
    };

    HseReport {
        sections,
        signature,
    }
}

/// Standing render-time normalization: "fragilidade" reads as "exposição"
/// everywhere the report shows risk text. Applied only at this boundary,
/// never at storage time.
pub fn normalize_risk_text(text: &str) -> String {
    text.replace("fragilidade", "exposição")
}

/// Fixed 2-decimal display for every score in the report.
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

fn introduction_text(instrument_name: &str) -> String {
    format!(
        "Este relatório apresenta os resultados do diagnóstico de riscos \
         psicossociais obtido com a aplicação do instrumento {instrument_name}. \
         As respostas coletadas foram consolidadas por questão e por dimensão, \
         e cada média foi classificada conforme as faixas de risco descritas \
         na metodologia."
    )
}

fn methodology() -> SectionBody {
    let scale = [
        (0, "nunca"),
        (1, "raramente"),
        (2, "às vezes"),
        (3, "frequentemente"),
        (4, "sempre"),
    ]
    .into_iter()
    .map(|(ordinal, meaning)| ScaleLegendEntry {
        ordinal,
        meaning: meaning.to_string(),
    })
    .collect();

    let band = |range: &str, label: &str| BandRow {
        range: range.to_string(),
        label: label.to_string(),
    };

    SectionBody::Methodology {
        scale,
        positive_bands: vec![
            band("3.00 a 4.00", "baixo"),
            band("2.00 a 2.99", "médio"),
            band("1.00 a 1.99", "moderado"),
            band("0.00 a 0.99", "alto"),
        ],
        negative_bands: vec![
            band("0.00 a 1.00", "baixo"),
            band("1.01 a 2.00", "médio"),
            band("2.01 a 3.00", "moderado"),
            band("3.01 a 4.00", "alto"),
        ],
    }
}

fn group_items(diagnostics: &[DiagnosticItem]) -> Vec<DimensionGroup> {
    let mut groups: Vec<DimensionGroup> = Vec::new();
    let mut current: Option<(i64, DimensionGroup)> = None;

    for item in diagnostics {
        let row = ItemRow {
            question_number: item.question_number,
            question_text: item.question_text.clone(),
            risk_label: normalize_risk_text(&item.risk_label),
            mean: item.mean,
            mean_display: format_score(item.mean),
        };

        let continues_group = matches!(&current, Some((id, _)) if *id == item.dimension_id.0);
        if continues_group {
            if let Some((_, group)) = current.as_mut() {
                group.items.push(row);
            }
        } else {
            if let Some((_, finished)) = current.take() {
                groups.push(finished);
            }
            current = Some((
                item.dimension_id.0,
                DimensionGroup {
                    dimension_name: item.dimension_name.clone(),
                    items: vec![row],
                },
            ));
        }
    }

    if let Some((_, finished)) = current {
        groups.push(finished);
    }
    groups
}

/// Splits a narrative into spans, highlighting every exact case-insensitive
/// occurrence of a registered dimension name. Longer names win at a given
/// position so "Apoio da Chefia" is not split by a dimension named "Apoio".
pub fn highlight_dimension_names(text: &str, dimensions: &[Dimension]) -> Vec<TextSpan> {
    let mut names: Vec<&str> = dimensions
        .iter()
        .map(|dimension| dimension.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));

    // char-by-char lowering keeps lowered and original index-aligned
    let original: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = original.iter().map(|c| lower_char(*c)).collect();
    let lowered_names: Vec<Vec<char>> = names
        .iter()
        .map(|name| name.chars().map(lower_char).collect())
        .collect();

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut index = 0;

    while index < lowered.len() {
        let matched = lowered_names
            .iter()
            .find(|name| lowered[index..].starts_with(name.as_slice()))
            .map(|name| name.len());

        match matched {
            Some(len) => {
                if plain_start < index {
                    spans.push(TextSpan::plain(
                        original[plain_start..index].iter().collect::<String>(),
                    ));
                }
                spans.push(TextSpan::highlight(
                    original[index..index + len].iter().collect::<String>(),
                ));
                index += len;
                plain_start = index;
            }
            None => index += 1,
        }
    }

    if plain_start < original.len() {
        spans.push(TextSpan::plain(
            original[plain_start..].iter().collect::<String>(),
        ));
    }
    if spans.is_empty() {
        spans.push(TextSpan::plain(""));
    }
    spans
}

fn lower_char(c: char) -> char {
    let mut lowered = c.to_lowercase();
    let first = lowered.next().unwrap_or(c);
    if lowered.next().is_some() {
        // multi-char lowering would desync the index alignment; keep the
        // original character instead
        c
    } else {
        first
    }
}

/// Splits a narrative on `**` emphasis markers, alternating plain and bold
/// spans. An unpaired trailing marker leaves the remainder plain.
pub fn parse_emphasis(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = text;
    let mut bold = false;

    while let Some(position) = rest.find("**") {
        let (chunk, remainder) = rest.split_at(position);
        if !chunk.is_empty() {
            spans.push(TextSpan {
                text: chunk.to_string(),
                emphasis: if bold { Emphasis::Bold } else { Emphasis::Plain },
            });
        }
        bold = !bold;
        rest = &remainder[2..];
    }

    // bold still set here means an unpaired opener; the remainder stays plain
    if !rest.is_empty() {
        spans.push(TextSpan::plain(rest));
    }
    if spans.is_empty() {
        spans.push(TextSpan::plain(""));
    }
    spans
}
