use std::sync::Arc;

use lamina::{Lamina, Palette, SpanSource};
use lamina_mock::{MockSource, SAMPLE_RESUME};

/// Text the demos annotate.
///
/// Reads the file named by `LAMINA_DEMO_TEXT` when set, otherwise the bundled sample resume.
///
/// # Errors
/// Returns an error if `LAMINA_DEMO_TEXT` names a file that cannot be read.
pub fn demo_text() -> std::io::Result<String> {
    match std::env::var("LAMINA_DEMO_TEXT") {
        Ok(path) => std::fs::read_to_string(path),
        Err(_) => Ok(SAMPLE_RESUME.to_string()),
    }
}

/// The three lexicon sources, in the order the resume models are registered.
#[must_use]
pub fn get_sources() -> Vec<Arc<dyn SpanSource>> {
    MockSource::all()
}

/// Orchestrator over [`get_sources`] with the resume palette.
///
/// # Errors
/// Returns an error if the builder rejects the configuration.
pub fn resume_lamina() -> Result<Lamina, lamina::LaminaError> {
    let mut b = Lamina::builder().palette(Palette::resume_default());
    for s in get_sources() {
        b = b.with_source(s);
    }
    b.build()
}
