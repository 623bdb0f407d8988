//! Deterministic span sources for tests and demos.
//!
//! [`MockSource`] tags phrases from a fixed lexicon, so every run over the same
//! text produces the same spans. [`DynamicMockSource`] defers its answers to a
//! controller so tests can script failures and hangs.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lamina_core::{LaminaError, RawSpan, SpanSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use fixtures::resume::SAMPLE_RESUME;

use fixtures::lexicon::{self, Entry};

/// Text marker that makes every [`MockSource`] fail the call.
pub const FAIL_MARKER: &str = "FAIL";
/// Text marker that makes every [`MockSource`] stall before answering.
pub const TIMEOUT_MARKER: &str = "TIMEOUT";
/// How long a [`MockSource`] stalls when it sees [`TIMEOUT_MARKER`].
pub const STALL: Duration = Duration::from_millis(200);

/// Lexicon-driven mock annotator.
pub struct MockSource {
    name: &'static str,
    labels: &'static [&'static str],
    lexicon: &'static [Entry],
}

impl MockSource {
    /// Dates, links, positions, degrees, locations, and metrics.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            name: "group1",
            labels: lexicon::STANDARD_LABELS,
            lexicon: lexicon::STANDARD,
        }
    }

    /// Companies, technologies, and person names.
    #[must_use]
    pub const fn companies() -> Self {
        Self {
            name: "group2",
            labels: lexicon::COMPANIES_LABELS,
            lexicon: lexicon::COMPANIES,
        }
    }

    /// Responsibilities, education, skills, contacts, and achievements.
    #[must_use]
    pub const fn experience() -> Self {
        Self {
            name: "group3",
            labels: lexicon::EXPERIENCE_LABELS,
            lexicon: lexicon::EXPERIENCE,
        }
    }

    /// All three lexicon sources in registration order.
    #[must_use]
    pub fn all() -> Vec<Arc<dyn SpanSource>> {
        vec![
            Arc::new(Self::standard()),
            Arc::new(Self::companies()),
            Arc::new(Self::experience()),
        ]
    }

    async fn maybe_fail_or_stall(&self, text: &str) -> Result<(), LaminaError> {
        if text.contains(FAIL_MARKER) {
            return Err(LaminaError::source_failed(self.name, "forced failure: annotate"));
        }
        if text.contains(TIMEOUT_MARKER) {
            tokio::time::sleep(STALL).await;
        }
        Ok(())
    }

    fn scan(&self, text: &str) -> Vec<RawSpan> {
        let mut out = Vec::new();
        for entry in self.lexicon {
            for (byte_at, matched) in text.match_indices(entry.phrase) {
                let start = text[..byte_at].chars().count();
                let end = start + matched.chars().count();
                out.push(RawSpan::new(start, end, entry.label, entry.confidence, matched));
            }
        }
        out
    }
}

#[async_trait]
impl SpanSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn labels(&self) -> &[&'static str] {
        self.labels
    }

    async fn annotate(&self, text: &str) -> Result<Vec<RawSpan>, LaminaError> {
        self.maybe_fail_or_stall(text).await?;
        Ok(self.scan(text))
    }
}
