use serde::{Deserialize, Serialize};

/// Fully composed diagnostic report: exactly seven ordered sections followed
/// by the signature block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HseReport {
    pub sections: Vec<ReportSection>,
    pub signature: SignatureBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub number: u8,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Introduction {
        text: String,
    },
    Methodology {
        scale: Vec<ScaleLegendEntry>,
        positive_bands: Vec<BandRow>,
        negative_bands: Vec<BandRow>,
    },
    ItemDiagnostics {
        groups: Vec<DimensionGroup>,
    },
    DimensionResults {
        rows: Vec<DimensionResultRow>,
    },
    Narrative {
        spans: Vec<TextSpan>,
    },
}

/// One entry of the answer-scale legend shown in the methodology section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLegendEntry {
    pub ordinal: u8,
    pub meaning: String,
}

/// One row of a fallback band table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandRow {
    pub range: String,
    pub label: String,
}

/// Diagnostic items of one dimension, in question order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionGroup {
    pub dimension_name: String,
    pub items: Vec<ItemRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    pub question_number: Option<u32>,
    pub question_text: String,
    pub risk_label: String,
    pub mean: f64,
    pub mean_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResultRow {
    pub name: String,
    pub risk_label: String,
    pub average: f64,
    pub average_display: String,
}

/// A run of narrative text with uniform emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub emphasis: Emphasis,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Bold,
        }
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Highlight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Plain,
    Bold,
    /// Dimension name matched in the interpretive analysis.
    Highlight,
}

/// Technical responsible party closing the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    pub name: String,
    pub registration: String,
}
