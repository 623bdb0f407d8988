//! The span compositor.
//!
//! Pipeline: [`aggregate`](aggregate::aggregate) source results into a
//! [`SpanList`](lamina_types::SpanList), [`partition`](partition::partition)
//! the text at span boundaries, then [`render`](render::render) each segment
//! with its covering spans as nested layers. [`summarize`](summary::summarize)
//! consumes the same span list independently.
//!
//! Every function here is pure and synchronous.

/// Union of per-source results into one ordered span list.
pub mod aggregate;
/// Markup escaping and punctuation normalization.
pub mod escape;
/// Legend and container markup.
pub mod legend;
/// Boundary partitioning into covered segments.
pub mod partition;
/// Layered markup rendering.
pub mod render;
/// Flat tabular projection.
pub mod summary;
