use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the lamina workspace.
///
/// Source-tagged variants are never fatal to a request: the orchestrator
/// records them as warnings on the report and keeps rendering with whatever
/// the remaining sources produced. Only configuration problems surface as
/// hard errors from builders and source selection.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LaminaError {
    /// An individual source returned an error.
    #[error("{source_id} failed: {msg}")]
    SourceFailed {
        /// Source name that failed.
        source_id: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual source call exceeded the configured per-source timeout.
    #[error("source timed out: {source_id}")]
    SourceTimeout {
        /// Source name that timed out.
        source_id: String,
    },

    /// The overall request deadline elapsed before this source answered.
    #[error("request deadline elapsed before {source_id} answered")]
    RequestTimeout {
        /// Source name that was abandoned.
        source_id: String,
    },

    /// A span with inverted, empty, or out-of-range offsets was dropped.
    #[error(
        "malformed span from {source_id}: [{start}, {end}) for text of length {text_len}"
    )]
    MalformedSpan {
        /// Source name that produced the span.
        source_id: String,
        /// Offending start offset.
        start: usize,
        /// Offending end offset.
        end: usize,
        /// Length of the annotated text, in chars.
        text_len: usize,
    },

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Source selection matched none of the registered sources.
    #[error("no active sources: {0}")]
    NoActiveSources(String),
}

impl LaminaError {
    /// Helper: build a `SourceFailed` error with the source name and message.
    pub fn source_failed(source_id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceFailed {
            source_id: source_id.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source_id: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_id: source_id.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(source_id: impl Into<String>) -> Self {
        Self::RequestTimeout {
            source_id: source_id.into(),
        }
    }

    /// Helper: build a `MalformedSpan` error.
    pub fn malformed_span(
        source_id: impl Into<String>,
        start: usize,
        end: usize,
        text_len: usize,
    ) -> Self {
        Self::MalformedSpan {
            source_id: source_id.into(),
            start,
            end,
            text_len,
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// The source this error is attributed to, if any.
    #[must_use]
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::SourceFailed { source_id, .. }
            | Self::SourceTimeout { source_id }
            | Self::RequestTimeout { source_id }
            | Self::MalformedSpan { source_id, .. } => Some(source_id),
            Self::InvalidArg(_) | Self::NoActiveSources(_) => None,
        }
    }

    /// Returns true if a whole source contributed nothing because of this error.
    ///
    /// `MalformedSpan` is excluded: it drops a single span, not the source.
    #[must_use]
    pub const fn is_source_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceFailed { .. } | Self::SourceTimeout { .. } | Self::RequestTimeout { .. }
        )
    }
}
