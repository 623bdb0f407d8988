use lamina::wrap_container;
use lamina_demos::common::{demo_text, resume_lamina};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the orchestrator over the three lexicon sources.
    let lamina = resume_lamina()?;

    // 2. Annotate the text with every source concurrently.
    let text = demo_text()?;
    let report = lamina.analyze(&text).await;

    // 3. Print a self-contained HTML page: legend on top, highlighted text below.
    println!("<!doctype html>");
    println!("<html><body>");
    println!("{}", lamina.legend());
    println!("{}", wrap_container(&report.markup));
    println!("</body></html>");

    lamina.shutdown().await;
    Ok(())
}
