//! lamina-core
//!
//! Core types, traits, and the pure compositor shared across the lamina workspace.
//!
//! - `types`: re-exported data structures (spans, palette, reports, errors).
//! - `source`: the `SpanSource` trait implemented by annotators.
//! - `compose`: escaping, aggregation, partitioning, rendering, and summaries.
//!
//! Nothing in `compose` performs I/O or keeps state; the same `(text, spans)`
//! always renders to the same markup.
#![warn(missing_docs)]

/// Pure span compositor.
pub mod compose;
/// The `SpanSource` trait implemented by annotators.
pub mod source;
pub mod types;

pub use compose::aggregate::{Aggregation, aggregate, tag_err};
pub use compose::escape::{escape, normalize_punctuation, unescape};
pub use compose::legend::{render_legend, wrap_container};
pub use compose::partition::{Segment, boundaries, partition};
pub use compose::render::{open_layer, render, render_spans, tooltip};
pub use compose::summary::summarize;
pub use source::SpanSource;
pub use types::*;
