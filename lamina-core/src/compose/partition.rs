use core::ops::Range;
use std::collections::BTreeSet;

use lamina_types::{Span, SpanList};
use serde::Serialize;

/// A maximal run of text with a fixed set of covering spans.
///
/// `start`/`end` are char offsets; `byte_range` addresses the same run in
/// the UTF-8 text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment<'a> {
    /// Inclusive start offset, in chars.
    pub start: usize,
    /// Exclusive end offset, in chars.
    pub end: usize,
    /// The same interval in bytes.
    pub byte_range: Range<usize>,
    /// Spans covering the whole segment, in aggregation order.
    pub active: Vec<&'a Span>,
}

impl<'a> Segment<'a> {
    /// The slice of `text` this segment covers.
    ///
    /// `text` must be the string the segment was partitioned from.
    #[must_use]
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.byte_range.clone()]
    }

    /// True when no span covers this segment.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.active.is_empty()
    }

    /// Active spans in nesting order, outermost first.
    ///
    /// Wider spans enclose narrower ones. Equal widths keep aggregation
    /// order, so the earlier span is the outer layer.
    #[must_use]
    pub fn layers(&self) -> Vec<&'a Span> {
        let mut layers = self.active.clone();
        layers.sort_by_key(|s| core::cmp::Reverse(s.len()));
        layers
    }
}

/// True if `span` lies inside a text of `text_len` chars and is non-empty.
const fn in_bounds(span: &Span, text_len: usize) -> bool {
    span.start() < span.end() && span.end() <= text_len
}

/// Cut points for a text of `text_len` chars: `{0, text_len}` plus every
/// start and end of an in-bounds span, ascending and deduplicated.
#[must_use]
pub fn boundaries(text_len: usize, spans: &SpanList) -> Vec<usize> {
    let mut cuts: BTreeSet<usize> = BTreeSet::from([0, text_len]);
    for s in spans.iter().filter(|s| in_bounds(s, text_len)) {
        cuts.insert(s.start());
        cuts.insert(s.end());
    }
    cuts.into_iter().collect()
}

/// Split `text` into contiguous segments at every span boundary.
///
/// - Segments ascend, never overlap, are never empty, and together cover the
///   whole text.
/// - A span is active in a segment only if it covers the segment entirely.
/// - With no spans the result is one plain segment over the whole text; an
///   empty text yields no segments.
/// - Spans that are empty or reach past the text are ignored; they neither
///   cut nor cover.
#[must_use]
pub fn partition<'a>(text: &str, spans: &'a SpanList) -> Vec<Segment<'a>> {
    // Byte offset of every char boundary, end of text included.
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(core::iter::once(text.len()))
        .collect();
    let text_len = byte_at.len() - 1;
    if text_len == 0 {
        return Vec::new();
    }

    let valid: Vec<&'a Span> = spans
        .iter()
        .filter(|s| in_bounds(s, text_len))
        .collect();
    if valid.is_empty() {
        return vec![Segment {
            start: 0,
            end: text_len,
            byte_range: 0..text.len(),
            active: Vec::new(),
        }];
    }

    let segments: Vec<Segment<'a>> = boundaries(text_len, spans)
        .windows(2)
        .map(|w| {
            let (start, end) = (w[0], w[1]);
            Segment {
                start,
                end,
                byte_range: byte_at[start]..byte_at[end],
                active: valid
                    .iter()
                    .copied()
                    .filter(|s| s.covers(start, end))
                    .collect(),
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "lamina::partition",
        spans = valid.len(),
        segments = segments.len(),
        "partitioned text"
    );

    segments
}
