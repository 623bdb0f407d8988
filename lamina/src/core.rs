use std::collections::HashSet;
#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use lamina_core::{
    LaminaConfig, LaminaError, Palette, RawSpan, SourceKey, SpanSource, render_legend,
};

/// Orchestrator that fans text out to registered sources and composes their spans.
pub struct Lamina {
    pub(crate) sources: Vec<Arc<dyn SpanSource>>,
    pub(crate) cfg: LaminaConfig,
}

/// Builder for constructing a `Lamina` orchestrator with custom configuration.
pub struct LaminaBuilder {
    sources: Vec<Arc<dyn SpanSource>>,
    cfg: LaminaConfig,
}

impl Default for LaminaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LaminaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no sources; you must register at least one via [`with_source`](Self::with_source).
    /// - Defaults: an empty palette (every label renders in neutral gray), 30s
    ///   per-source timeout, no request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: LaminaConfig::default(),
        }
    }

    /// Register a span source.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is aggregation order: among spans starting at the same
    ///   offset with the same width, the earlier-registered source renders outermost.
    /// - Every registered source is called for every request unless the request
    ///   selects a subset via [`Lamina::analyze_only`].
    /// - Source names must be unique; `build` rejects duplicates.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn SpanSource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Set the palette used for rendering and the legend.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.cfg.palette = palette;
        self
    }

    /// Set the per-source call timeout.
    ///
    /// Behavior and trade-offs:
    /// - A source that does not answer in time contributes no spans and is
    ///   reported as a `SourceTimeout` warning; the other sources are unaffected.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set an overall deadline for the fan-out.
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency of a request regardless of per-source timeouts.
    /// - When exceeded, sources that already answered are kept; each unfinished
    ///   source is abandoned and reported as a `RequestTimeout` warning.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    #[must_use]
    pub fn config(mut self, cfg: LaminaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Lamina` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered via
    /// [`with_source`](Self::with_source), if two sources share a name, if a
    /// timeout is zero, or if the palette is invalid.
    pub fn build(self) -> Result<Lamina, LaminaError> {
        if self.sources.is_empty() {
            return Err(LaminaError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }

        let mut seen: HashSet<&'static str> = HashSet::new();
        for s in &self.sources {
            if !seen.insert(s.name()) {
                return Err(LaminaError::invalid_arg(format!(
                    "duplicate source name: {}",
                    s.name()
                )));
            }
        }

        if self.cfg.source_timeout.is_zero() {
            return Err(LaminaError::invalid_arg("source_timeout must be non-zero"));
        }
        if self.cfg.request_timeout.is_some_and(|d| d.is_zero()) {
            return Err(LaminaError::invalid_arg("request_timeout must be non-zero"));
        }
        self.cfg.palette.validate()?;

        Ok(Lamina {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

impl Lamina {
    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "lamina::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<Fut>(
        source_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<Vec<RawSpan>, LaminaError>
    where
        Fut: core::future::Future<Output = Result<Vec<RawSpan>, LaminaError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(LaminaError::source_timeout(source_name)))
    }

    /// Start building a new `Lamina` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use lamina::{Lamina, Palette};
    ///
    /// let lamina = Lamina::builder()
    ///     .with_source(Arc::new(NerModel::load("models/group1")?))
    ///     .with_source(Arc::new(NerModel::load("models/group2")?))
    ///     .palette(Palette::resume_default())
    ///     .source_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> LaminaBuilder {
        LaminaBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &LaminaConfig {
        &self.cfg
    }

    /// Keys of the registered sources, in registration order.
    #[must_use]
    pub fn source_keys(&self) -> Vec<SourceKey> {
        self.sources.iter().map(|s| s.key()).collect()
    }

    /// Legend markup for the configured palette.
    #[must_use]
    pub fn legend(&self) -> String {
        render_legend(&self.cfg.palette)
    }

    /// Release every registered source, concurrently.
    ///
    /// The orchestrator stays usable afterwards only if the sources tolerate
    /// calls after shutdown; most backends do not.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "lamina::core::shutdown", skip(self))
    )]
    pub async fn shutdown(&self) {
        futures::future::join_all(self.sources.iter().map(|s| s.shutdown())).await;
    }

    /// Sources matching `keys`, in registration order.
    pub(crate) fn selected(&self, keys: &[SourceKey]) -> Vec<Arc<dyn SpanSource>> {
        self.sources
            .iter()
            .filter(|s| keys.iter().any(|k| k.as_str() == s.name()))
            .cloned()
            .collect()
    }
}
