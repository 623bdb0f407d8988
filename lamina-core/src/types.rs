//! Re-export of foundational types from `lamina-types`.
// Consolidated re-exports so downstream crates can depend on `lamina-core` only

pub use lamina_types::{
    AnalysisReport, LaminaConfig, LaminaError, LegendGroup, Palette, RawSpan, Rgb, SourceKey,
    Span, SpanList, Summary, SummaryRow,
};
