//! Report envelopes produced by the orchestrator and the summary builder.

use serde::{Deserialize, Serialize};

use crate::error::LaminaError;
use crate::span::{Span, SpanList};

/// One row of the flat span table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Surface text reported by the source.
    pub text: String,
    /// Entity label.
    pub label: String,
    /// Source that produced the span.
    pub source_id: String,
    /// Annotator score as reported.
    pub confidence: f64,
}

impl SummaryRow {
    /// Confidence rounded to three decimals, as shown in tables.
    #[must_use]
    pub fn rounded_confidence(&self) -> f64 {
        (self.confidence * 1000.0).round() / 1000.0
    }
}

impl From<&Span> for SummaryRow {
    fn from(s: &Span) -> Self {
        Self {
            text: s.text().to_string(),
            label: s.label().to_string(),
            source_id: s.source_id().to_string(),
            confidence: s.confidence(),
        }
    }
}

/// Flat view over an aggregated span list plus two scalar metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Rows in aggregation order.
    pub rows: Vec<SummaryRow>,
    /// Number of spans.
    pub count: usize,
    /// Arithmetic mean of all confidences; `0` when there are no spans.
    pub mean_confidence: f64,
}

impl Summary {
    /// Mean confidence formatted with two decimals.
    #[must_use]
    pub fn mean_confidence_display(&self) -> String {
        format!("{:.2}", self.mean_confidence)
    }
}

/// Result of one analysis request.
///
/// Carries the aggregated spans, the rendered markup, the summary, and any
/// non-fatal warnings (failed sources, dropped spans) encountered on the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Aggregated spans from every source that answered.
    pub spans: SpanList,
    /// Layered markup for the analysed text.
    pub markup: String,
    /// Flat summary of `spans`.
    pub summary: Summary,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<LaminaError>,
}

impl AnalysisReport {
    /// Names of sources that contributed nothing because they failed.
    #[must_use]
    pub fn failed_sources(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter(|w| w.is_source_failure())
            .filter_map(LaminaError::source_id)
            .collect()
    }
}
