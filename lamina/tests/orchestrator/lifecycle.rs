use std::sync::atomic::Ordering;

use lamina::Lamina;
use lamina_mock::DynamicMockSource;

use crate::helpers::{MockSource, raw};

#[tokio::test]
async fn shutdown_reaches_every_source_once() {
    let a = MockSource::builder().name("a");
    let a_down = a.shutdowns();
    let (dynamic, controller) = DynamicMockSource::new_with_controller("dyn");

    let lamina = Lamina::builder()
        .with_source(a.build())
        .with_source(dynamic)
        .build()
        .unwrap();

    lamina.shutdown().await;
    assert_eq!(a_down.load(Ordering::SeqCst), 1);
    assert_eq!(controller.shutdowns().await, 1);
}

#[tokio::test]
async fn sources_are_reused_and_output_is_deterministic() {
    let text = "Kubernetes";
    let b = MockSource::builder()
        .name("a")
        .returns_spans(vec![raw(text, 0, 10, "TECHNOLOGIES", 0.9)]);
    let calls = b.calls();
    let lamina = Lamina::builder().with_source(b.build()).build().unwrap();

    let first = lamina.analyze(text).await;
    let second = lamina.analyze(text).await;
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn analyze_runs_on_a_blocking_executor() {
    let lamina = Lamina::builder()
        .with_source(MockSource::builder().name("a").build())
        .build()
        .unwrap();
    let report = tokio_test::block_on(lamina.analyze("plain"));
    assert_eq!(report.markup, "plain");
}
