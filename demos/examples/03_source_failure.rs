use std::time::Duration;

use lamina::{Lamina, Palette, SourceKey};
use lamina_demos::common::get_sources;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tight per-source budget: text containing TIMEOUT stalls every lexicon source past it.
    let mut b = Lamina::builder()
        .palette(Palette::resume_default())
        .source_timeout(Duration::from_millis(50));
    for s in get_sources() {
        b = b.with_source(s);
    }
    let lamina = b.build()?;

    // 1. A failing request still produces a report: the escaped text, no highlights.
    let report = lamina.analyze("Ivan Petrov, Yandex. FAIL").await;
    println!("markup: {}", report.markup);
    for w in &report.warnings {
        println!("warning: {w}");
    }

    // 2. Timeouts are reported per source.
    let report = lamina.analyze("TIMEOUT while parsing Kafka").await;
    println!("failed sources: {:?}", report.failed_sources());

    // 3. Restricting to one source.
    let report = lamina
        .analyze_only("Rust and Kafka at Yandex", &[SourceKey::new("group2")])
        .await?;
    println!("{}", serde_json::to_string_pretty(&report.spans)?);

    // 4. Selecting nothing known is a configuration error.
    if let Err(e) = lamina.analyze_only("Rust", &[SourceKey::new("group9")]).await {
        println!("selection rejected: {e}");
    }

    lamina.shutdown().await;
    Ok(())
}
