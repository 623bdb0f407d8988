//! Span types exchanged between sources and the compositor.

use serde::{Deserialize, Serialize};

/// A span exactly as an annotator reported it, before provenance is attached.
///
/// Offsets are char (Unicode scalar value) offsets into the annotated text,
/// half-open: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// Entity label, open vocabulary.
    pub label: String,
    /// Annotator score, expected in `[0, 1]`.
    pub confidence: f64,
    /// Text the annotator claims the span covers.
    pub text: String,
}

impl RawSpan {
    /// Construct a raw span.
    pub fn new(
        start: usize,
        end: usize,
        label: impl Into<String>,
        confidence: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            confidence,
            text: text.into(),
        }
    }
}

/// A labeled half-open interval over the text, tagged with the source that produced it.
///
/// Spans are immutable once constructed; offsets are never reinterpreted
/// after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
    label: String,
    source_id: String,
    confidence: f64,
    text: String,
}

impl Span {
    /// Attach provenance to a raw span.
    pub fn from_raw(source_id: impl Into<String>, raw: RawSpan) -> Self {
        Self {
            start: raw.start,
            end: raw.end,
            label: raw.label,
            source_id: source_id.into(),
            confidence: raw.confidence,
            text: raw.text,
        }
    }

    /// Inclusive start offset, in chars.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset, in chars.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Width of the interval in chars.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the interval is empty or inverted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Entity label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Name of the source that produced this span.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Annotator score, passed through unclamped.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Surface text reported by the annotator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if this span covers the whole of `[start, end)`.
    #[must_use]
    pub const fn covers(&self, start: usize, end: usize) -> bool {
        self.start <= start && self.end >= end
    }
}

/// Spans from every source, ordered by start offset.
///
/// Ties keep the order in which sources were combined, so the list is only
/// ever built through a stable sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Span>", into = "Vec<Span>")]
pub struct SpanList(Vec<Span>);

impl From<Vec<Span>> for SpanList {
    fn from(spans: Vec<Span>) -> Self {
        Self::from_unsorted(spans)
    }
}

impl From<SpanList> for Vec<Span> {
    fn from(list: SpanList) -> Self {
        list.0
    }
}

impl SpanList {
    /// Stable-sort `spans` by start offset and wrap them.
    #[must_use]
    pub fn from_unsorted(mut spans: Vec<Span>) -> Self {
        // `sort_by_key` is stable; tie order is visible in rendering.
        spans.sort_by_key(Span::start);
        Self(spans)
    }

    /// Number of spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no source produced a usable span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in aggregation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.0.iter()
    }

    /// Borrow as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Span] {
        &self.0
    }

    /// Unwrap into the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<Span> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SpanList {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
