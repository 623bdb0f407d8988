use lamina_demos::common::{demo_text, resume_lamina};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lamina = resume_lamina()?;
    let text = demo_text()?;
    let report = lamina.analyze(&text).await;

    // Entity table, one row per span in text order.
    println!("{:<50} {:<18} {:<8} {:>10}", "Text", "Label", "Source", "Confidence");
    for row in &report.summary.rows {
        println!(
            "{:<50} {:<18} {:<8} {:>10}",
            row.text.replace('\n', " "),
            row.label,
            row.source_id,
            row.rounded_confidence()
        );
    }
    println!();
    println!("Total entities: {}", report.summary.count);
    println!("Mean confidence: {}", report.summary.mean_confidence_display());

    // Machine-readable form of the same summary.
    println!("{}", serde_json::to_string_pretty(&report.summary)?);

    lamina.shutdown().await;
    Ok(())
}
