use lamina_demos::common::{demo_text, resume_lamina};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,lamina=trace,lamina_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let lamina = resume_lamina()?;
    let text = demo_text()?;

    // Full fan-out, then the same request with a forced failure
    let report = lamina.analyze(&text).await;
    tracing::info!(spans = report.spans.len(), "annotated");

    let failing = format!("{text}\nFAIL");
    let report = lamina.analyze(&failing).await;
    tracing::info!(warnings = report.warnings.len(), "annotated with failures");

    lamina.shutdown().await;
    Ok(())
}
