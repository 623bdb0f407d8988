use async_trait::async_trait;

use crate::LaminaError;
pub use lamina_types::SourceKey;
use lamina_types::RawSpan;

/// An annotator that produces labeled spans for a piece of text.
///
/// Sources are created once, registered with the orchestrator, reused across
/// requests, and released through [`SpanSource::shutdown`]. The compositor
/// never trusts their output: every span is validated against the text
/// before it is rendered.
#[async_trait]
pub trait SpanSource: Send + Sync {
    /// A stable identifier, also used as the span provenance tag (e.g. "group1").
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    ///
    /// Use this helper when restricting a request to a subset of sources.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Labels this source may emit, if it knows them up front.
    ///
    /// Informational only; emitted labels are never checked against it.
    fn labels(&self) -> &[&'static str] {
        &[]
    }

    /// Annotate `text`, returning spans with char offsets into it.
    async fn annotate(&self, text: &str) -> Result<Vec<RawSpan>, LaminaError>;

    /// Release backend resources. Called once when the orchestrator shuts down.
    async fn shutdown(&self) {}
}
