use std::sync::Arc;
use std::sync::atomic::Ordering;

use lamina::{Lamina, LaminaError, SourceKey, SpanSource};

use crate::helpers::{MockSource, raw};

#[tokio::test]
async fn only_selected_sources_are_called() {
    let text = "PostgreSQL";
    let a = MockSource::builder()
        .name("a")
        .returns_spans(vec![raw(text, 0, 10, "TECHNOLOGIES", 0.9)]);
    let a_calls = a.calls();
    let b = MockSource::builder()
        .name("b")
        .returns_spans(vec![raw(text, 0, 10, "SKILLS", 0.5)]);
    let b_calls = b.calls();

    let lamina = Lamina::builder()
        .with_source(a.build())
        .with_source(b.build())
        .build()
        .unwrap();

    let report = lamina
        .analyze_only(text, &[SourceKey::new("b")])
        .await
        .unwrap();
    assert_eq!(a_calls.load(Ordering::SeqCst), 0);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    let labels: Vec<&str> = report.spans.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["SKILLS"]);
}

#[tokio::test]
async fn selection_keeps_registration_order_and_ignores_unknown_keys() {
    let companies: Arc<dyn SpanSource> = Arc::new(lamina_mock::MockSource::companies());
    let standard: Arc<dyn SpanSource> = Arc::new(lamina_mock::MockSource::standard());
    let experience: Arc<dyn SpanSource> = Arc::new(lamina_mock::MockSource::experience());
    let keys = [experience.key(), SourceKey::new("missing"), standard.key()];

    let lamina = Lamina::builder()
        .with_source(standard)
        .with_source(companies)
        .with_source(experience)
        .build()
        .unwrap();

    let text = "Moscow State University";
    let report = lamina.analyze_only(text, &keys).await.unwrap();
    let sources: Vec<&str> = report.spans.iter().map(|s| s.source_id()).collect();
    assert_eq!(sources, vec!["group1", "group3"]);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn empty_or_unknown_selection_is_an_error() {
    let lamina = Lamina::builder()
        .with_source(MockSource::builder().name("a").build())
        .build()
        .unwrap();

    let err = lamina.analyze_only("text", &[]).await.unwrap_err();
    assert!(matches!(err, LaminaError::NoActiveSources(_)));

    let err = lamina
        .analyze_only("text", &[SourceKey::new("nope")])
        .await
        .unwrap_err();
    match err {
        LaminaError::NoActiveSources(msg) => assert!(msg.contains("nope")),
        other => panic!("unexpected: {other:?}"),
    }
}
