use std::time::Duration;

use lamina::{Lamina, LaminaError};
use lamina_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{MockSource, m_spans, raw};

#[tokio::test(start_paused = true)]
async fn slow_source_times_out_alone() {
    let text = "Rust";
    let slow = MockSource::builder()
        .name("slow")
        .delay(Duration::from_secs(5))
        .returns_spans(vec![raw(text, 0, 4, "SKILLS", 0.6)])
        .build();
    let lamina = Lamina::builder()
        .with_source(slow)
        .with_source(m_spans("fast", vec![raw(text, 0, 4, "TECHNOLOGIES", 0.9)]))
        .source_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let report = lamina.analyze(text).await;
    assert_eq!(report.spans.len(), 1);
    assert_eq!(report.spans.as_slice()[0].source_id(), "fast");
    assert_eq!(report.warnings, vec![LaminaError::source_timeout("slow")]);
}

#[tokio::test(start_paused = true)]
async fn request_deadline_keeps_finished_sources() {
    let text = "Yandex";
    let straggler = MockSource::builder()
        .name("straggler")
        .delay(Duration::from_secs(10))
        .returns_spans(vec![raw(text, 0, 6, "COMPANIES", 0.4)])
        .build();
    let lamina = Lamina::builder()
        .with_source(m_spans("quick", vec![raw(text, 0, 6, "COMPANIES", 0.95)]))
        .with_source(straggler)
        .request_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let report = lamina.analyze(text).await;
    assert_eq!(report.spans.len(), 1);
    assert_eq!(report.spans.as_slice()[0].source_id(), "quick");
    assert_eq!(report.warnings, vec![LaminaError::request_timeout("straggler")]);
    assert_eq!(report.failed_sources(), vec!["straggler"]);
}

#[tokio::test(start_paused = true)]
async fn hanging_source_is_abandoned_at_deadline() {
    let (hang, controller) = DynamicMockSource::new_with_controller("hang");
    controller.set_behavior(MockBehavior::Hang).await;

    let lamina = Lamina::builder()
        .with_source(hang)
        .with_source(m_spans("ok", vec![raw("Go", 0, 2, "TECHNOLOGIES", 0.8)]))
        .request_timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    let report = lamina.analyze("Go").await;
    assert_eq!(report.spans.len(), 1);
    assert_eq!(report.warnings, vec![LaminaError::request_timeout("hang")]);
    assert_eq!(controller.requests().await, vec!["Go"]);
}

#[tokio::test(start_paused = true)]
async fn timeout_marker_stalls_lexicon_sources_past_their_budget() {
    let mut b = Lamina::builder().source_timeout(Duration::from_millis(50));
    for s in lamina_mock::MockSource::all() {
        b = b.with_source(s);
    }
    let lamina = b.build().unwrap();

    let report = lamina.analyze("TIMEOUT at Yandex").await;
    assert!(report.spans.is_empty());
    assert_eq!(
        report.warnings,
        vec![
            LaminaError::source_timeout("group1"),
            LaminaError::source_timeout("group2"),
            LaminaError::source_timeout("group3"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn generous_budget_lets_stalled_sources_answer() {
    let lamina = Lamina::builder()
        .with_source(std::sync::Arc::new(lamina_mock::MockSource::companies()))
        .source_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let report = lamina.analyze("TIMEOUT at Yandex").await;
    assert!(report.warnings.is_empty());
    let labels: Vec<&str> = report.spans.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["COMPANIES"]);
}
