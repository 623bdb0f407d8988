use lamina_types::{LaminaError, RawSpan, Span, SpanList};

/// Spans gathered from every source plus the issues met along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Valid spans, stable-sorted by start offset.
    pub spans: SpanList,
    /// Failed sources and dropped spans, in source order.
    pub warnings: Vec<LaminaError>,
}

/// Union the output of several sources into one ordered span list.
///
/// - `results` is consumed in order; that order breaks ties between spans
///   starting at the same offset.
/// - A source result that is `Err` contributes no spans; its error is kept as
///   a warning, tagged with the source name when it was not already.
/// - A span with `start >= end` or `end` past the text's char length is
///   dropped and reported as `MalformedSpan`. Offsets are never clamped.
/// - Spans are neither deduplicated nor merged across sources: two sources
///   agreeing on the same interval and label yield two spans.
pub fn aggregate<I, S>(text: &str, results: I) -> Aggregation
where
    I: IntoIterator<Item = (S, Result<Vec<RawSpan>, LaminaError>)>,
    S: AsRef<str>,
{
    let text_len = text.chars().count();
    let mut spans: Vec<Span> = Vec::new();
    let mut warnings: Vec<LaminaError> = Vec::new();

    for (source_id, result) in results {
        let source_id = source_id.as_ref();
        match result {
            Ok(raw) => {
                for r in raw {
                    if r.start >= r.end || r.end > text_len {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            target: "lamina::aggregate",
                            source = source_id,
                            start = r.start,
                            end = r.end,
                            text_len,
                            "dropping malformed span"
                        );
                        warnings.push(LaminaError::malformed_span(
                            source_id, r.start, r.end, text_len,
                        ));
                        continue;
                    }
                    spans.push(Span::from_raw(source_id, r));
                }
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "lamina::aggregate",
                    source = source_id,
                    error = %e,
                    "source failed; omitting its spans"
                );
                warnings.push(tag_err(source_id, e));
            }
        }
    }

    Aggregation {
        spans: SpanList::from_unsorted(spans),
        warnings,
    }
}

/// Attribute an error to `source_id`.
///
/// The error is kept as-is only when it is already a source failure naming
/// `source_id`. Anything else a source returns, including a failure that
/// names some other source, is wrapped as `SourceFailed` for `source_id`.
#[must_use]
pub fn tag_err(source_id: &str, e: LaminaError) -> LaminaError {
    if e.is_source_failure() && e.source_id() == Some(source_id) {
        e
    } else {
        LaminaError::source_failed(source_id, e.to_string())
    }
}
