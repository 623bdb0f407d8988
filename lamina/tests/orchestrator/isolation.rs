use lamina::{Lamina, LaminaError, Span};
use lamina_core::escape;

use crate::helpers::{MockSource, m_fail, m_spans, raw};

#[tokio::test]
async fn failing_source_contributes_nothing() {
    let text = "Rust and Go";
    let lamina = Lamina::builder()
        .with_source(m_fail("X", "CUDA out of memory"))
        .with_source(m_spans(
            "Y",
            vec![
                raw(text, 9, 11, "TECHNOLOGIES", 0.7),
                raw(text, 0, 4, "TECHNOLOGIES", 0.9),
            ],
        ))
        .build()
        .unwrap();

    let report = lamina.analyze(text).await;

    let starts: Vec<usize> = report.spans.iter().map(Span::start).collect();
    assert_eq!(starts, vec![0, 9]);
    assert!(report.spans.iter().all(|s| s.source_id() == "Y"));
    assert_eq!(report.failed_sources(), vec!["X"]);
    match &report.warnings[..] {
        [LaminaError::SourceFailed { source_id, msg }] => {
            assert_eq!(source_id, "X");
            assert!(msg.contains("CUDA out of memory"));
        }
        other => panic!("unexpected warnings: {other:?}"),
    }
    assert_eq!(report.summary.count, 2);
}

#[tokio::test]
async fn all_sources_failing_renders_plain_escaped_text() {
    let text = "R&D <lead>";
    let lamina = Lamina::builder()
        .with_source(m_fail("a", "down"))
        .with_source(m_fail("b", "down"))
        .build()
        .unwrap();

    let report = lamina.analyze(text).await;
    assert!(report.spans.is_empty());
    assert_eq!(report.markup, escape(text));
    assert_eq!(report.failed_sources(), vec!["a", "b"]);
    assert_eq!(report.summary.count, 0);
    assert_eq!(report.summary.mean_confidence, 0.0);
}

#[tokio::test]
async fn malformed_spans_are_dropped_and_reported() {
    let text = "abc";
    let lamina = Lamina::builder()
        .with_source(m_spans(
            "bad",
            vec![raw(text, 1, 9, "PAST_END", 0.5), raw(text, 0, 3, "OK", 0.5)],
        ))
        .build()
        .unwrap();

    let report = lamina.analyze(text).await;
    assert_eq!(report.spans.len(), 1);
    assert_eq!(report.warnings, vec![LaminaError::malformed_span("bad", 1, 9, 3)]);
    assert!(report.failed_sources().is_empty(), "malformed spans do not fail a source");
}

#[tokio::test]
async fn failure_blaming_another_source_is_pinned_on_its_sender() {
    let text = "Go";
    let liar = MockSource::builder()
        .name("a")
        .with_annotate_fn(|_| Err(LaminaError::source_failed("b", "oom")))
        .build();
    let lamina = Lamina::builder()
        .with_source(liar)
        .with_source(m_spans("b", vec![raw(text, 0, 2, "TECHNOLOGIES", 0.8)]))
        .build()
        .unwrap();

    let report = lamina.analyze(text).await;
    let sources: Vec<&str> = report.spans.iter().map(Span::source_id).collect();
    assert_eq!(sources, vec!["b"]);
    assert_eq!(report.failed_sources(), vec!["a"]);
}

#[tokio::test]
async fn returned_malformed_span_error_counts_as_source_failure() {
    let src = MockSource::builder()
        .name("proxy")
        .with_annotate_fn(|_| Err(LaminaError::malformed_span("upstream", 4, 2, 4)))
        .build();
    let lamina = Lamina::builder().with_source(src).build().unwrap();

    let report = lamina.analyze("text").await;
    assert!(report.spans.is_empty());
    assert_eq!(report.failed_sources(), vec!["proxy"]);
}

#[tokio::test]
async fn fail_marker_knocks_out_every_lexicon_source() {
    let mut b = Lamina::builder();
    for s in lamina_mock::MockSource::all() {
        b = b.with_source(s);
    }
    let lamina = b.build().unwrap();

    let report = lamina.analyze("Ivan Petrov, Yandex, FAIL").await;
    assert!(report.spans.is_empty());
    assert_eq!(report.failed_sources(), vec!["group1", "group2", "group3"]);
}
