
pub use mock_source::MockSource;

use std::sync::Arc;

use lamina::{RawSpan, SpanSource};

/// Source that always answers with `spans`.
pub fn m_spans(name: &'static str, spans: Vec<RawSpan>) -> Arc<dyn SpanSource> {
    MockSource::builder().name(name).returns_spans(spans).build()
}

/// Source that always fails with `msg`.
pub fn m_fail(name: &'static str, msg: &'static str) -> Arc<dyn SpanSource> {
    MockSource::builder().name(name).will_fail(msg).build()
}

/// Raw span over `text[start..end]` counted in chars.
pub fn raw(text: &str, start: usize, end: usize, label: &str, confidence: f64) -> RawSpan {
    let covered: String = text.chars().skip(start).take(end.saturating_sub(start)).collect();
    RawSpan::new(start, end, label, confidence, covered)
}
