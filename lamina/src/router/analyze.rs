use std::sync::Arc;

use lamina_core::{
    Aggregation, AnalysisReport, LaminaError, SourceKey, SpanSource, aggregate, render_spans,
    summarize,
};

use crate::Lamina;
use crate::router::util::join_indexed_with_deadline;

impl Lamina {
    /// Fan `text` out to every registered source and aggregate their spans.
    ///
    /// Behavior and trade-offs:
    /// - All sources run concurrently; each call is bounded by the per-source timeout.
    /// - A failed, timed-out, or abandoned source contributes no spans and is
    ///   listed in `warnings`; the others are unaffected.
    /// - Spans are ordered by start offset, ties broken by registration order.
    /// - Empty text short-circuits: no source is called.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "lamina::router",
            skip(self, text),
            fields(text_len = text.len(), sources = self.sources.len()),
        )
    )]
    pub async fn annotate(&self, text: &str) -> Aggregation {
        self.fan_out(text, &self.sources).await
    }

    /// Annotate `text` with every registered source and build the full report.
    ///
    /// The report carries the spans, layered markup rendered with the
    /// configured palette, the summary, and all warnings. Never fails: with
    /// every source down the report is the escaped text with no highlights.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "lamina::router",
            skip(self, text),
            fields(text_len = text.len()),
        )
    )]
    pub async fn analyze(&self, text: &str) -> AnalysisReport {
        let agg = self.annotate(text).await;
        self.report(text, agg)
    }

    /// Like [`analyze`](Self::analyze), restricted to the sources named in `keys`.
    ///
    /// Unknown keys are ignored. Selected sources keep their registration order.
    ///
    /// # Errors
    /// Returns `NoActiveSources` if `keys` is empty or names no registered source.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "lamina::router",
            skip(self, text, keys),
            fields(text_len = text.len(), selected = keys.len()),
        )
    )]
    pub async fn analyze_only(
        &self,
        text: &str,
        keys: &[SourceKey],
    ) -> Result<AnalysisReport, LaminaError> {
        let selected = self.selected(keys);
        if selected.is_empty() {
            let asked: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
            return Err(LaminaError::NoActiveSources(format!(
                "selection {asked:?} matches none of the registered sources"
            )));
        }
        let agg = self.fan_out(text, &selected).await;
        Ok(self.report(text, agg))
    }

    async fn fan_out(&self, text: &str, sources: &[Arc<dyn SpanSource>]) -> Aggregation {
        if text.is_empty() {
            return Aggregation::default();
        }

        let call_timeout = self.cfg.source_timeout;
        let tasks = sources.iter().enumerate().map(|(i, s)| {
            let s = Arc::clone(s);
            async move {
                let res =
                    Self::source_call_with_timeout(s.name(), call_timeout, s.annotate(text)).await;
                (i, res)
            }
        });

        let slots = join_indexed_with_deadline(sources.len(), tasks, self.cfg.request_timeout).await;

        let results = sources.iter().zip(slots).map(|(s, slot)| {
            let name = s.name();
            let res = slot.unwrap_or_else(|| Err(LaminaError::request_timeout(name)));
            (name, res)
        });

        let agg = aggregate(text, results);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "lamina::router",
            spans = agg.spans.len(),
            warnings = agg.warnings.len(),
            "fan-out complete"
        );

        agg
    }

    fn report(&self, text: &str, agg: Aggregation) -> AnalysisReport {
        let Aggregation { spans, warnings } = agg;
        let markup = render_spans(text, &spans, &self.cfg.palette);
        let summary = summarize(&spans);
        AnalysisReport {
            spans,
            markup,
            summary,
            warnings,
        }
    }
}
