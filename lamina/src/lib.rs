//! Lamina fans a text out to several span annotators and composes their
//! overlapping answers into one layered, highlighted rendering.
//!
//! Overview
//! - Calls every registered [`SpanSource`] concurrently with the same text.
//! - Unions their spans with provenance tags; conflicts are rendered, never resolved.
//! - Partitions the text at every span boundary and renders nested highlight layers,
//!   widest span outermost, with colors from the configured [`Palette`].
//! - Produces a flat summary (text, label, source, confidence) and a mean confidence.
//!
//! Key behaviors and trade-offs
//! - Isolation: a source that errors, exceeds the per-source timeout, or is still
//!   running when the request deadline elapses contributes nothing; the report
//!   lists it in `warnings` and renders the remaining sources' spans.
//! - Validation: spans with inverted, empty, or out-of-range offsets are dropped
//!   and reported, never clamped.
//! - Determinism: given the same source answers, markup is identical across runs.
//!   Ties between equal spans are broken by registration order.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use lamina::{Lamina, Palette};
//!
//! let lamina = Lamina::builder()
//!     .with_source(Arc::new(StandardNer::load()?))
//!     .with_source(Arc::new(CompaniesNer::load()?))
//!     .palette(Palette::resume_default())
//!     .request_timeout(std::time::Duration::from_secs(20))
//!     .build()?;
//!
//! let report = lamina.analyze(&resume_text).await;
//! let page = format!("{}{}", lamina.legend(), lamina::wrap_container(&report.markup));
//! for w in &report.warnings {
//!     eprintln!("warning: {w}");
//! }
//! lamina.shutdown().await;
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Lamina, LaminaBuilder};
pub use router::util::join_indexed_with_deadline;

// Re-export core types for convenience
pub use lamina_core::{
    Aggregation,
    AnalysisReport,
    LaminaConfig,
    LaminaError,
    LegendGroup,
    Palette,
    RawSpan,
    Rgb,
    Segment,
    SourceKey,
    Span,
    SpanList,
    SpanSource,
    Summary,
    SummaryRow,

    partition,
    render,
    render_legend,
    render_spans,
    summarize,
    wrap_container,
};
