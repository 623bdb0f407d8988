use core::fmt::Write as _;

use lamina_types::{Palette, Span, SpanList};

use super::escape::escape;
use super::partition::{Segment, partition};

/// Tooltip text for a layer, e.g. `SKILLS (0.93)`.
#[must_use]
pub fn tooltip(span: &Span) -> String {
    format!("{} ({:.2})", span.label(), span.confidence())
}

/// Opening tag of the layer drawn for `span`.
///
/// The background is the label color at the palette alpha so stacked layers
/// blend; the bottom border uses the opaque color to keep nested layers
/// distinguishable.
#[must_use]
pub fn open_layer(span: &Span, palette: &Palette) -> String {
    let color = palette.color_for(span.label());
    let mut tag = String::with_capacity(192);
    let _ = write!(
        tag,
        r#"<span style="background-color: {}; border-bottom: 2px solid {}; padding: 1px 0;" title="{}" data-label="{}" data-source="{}">"#,
        color.rgba(palette.alpha),
        color.to_hex(),
        escape(&tooltip(span)),
        escape(span.label()),
        escape(span.source_id()),
    );
    tag
}

/// Render partitioned text as layered markup.
///
/// Segments are emitted in order. Plain segments become escaped text; covered
/// segments are wrapped in one layer per active span, outermost (widest)
/// first. `text` must be the string `segments` were built from.
#[must_use]
pub fn render(text: &str, segments: &[Segment<'_>], palette: &Palette) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for seg in segments {
        let safe = escape(seg.text(text));
        if seg.is_plain() {
            out.push_str(&safe);
            continue;
        }
        let layers = seg.layers();
        for span in &layers {
            out.push_str(&open_layer(span, palette));
        }
        out.push_str(&safe);
        for _ in &layers {
            out.push_str("</span>");
        }
    }
    out
}

/// Partition and render in one step.
#[must_use]
pub fn render_spans(text: &str, spans: &SpanList, palette: &Palette) -> String {
    render(text, &partition(text, spans), palette)
}
