//! Lamina-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod palette;
mod reports;
mod source;
mod span;

pub use config::LaminaConfig;
pub use error::LaminaError;
pub use palette::{LegendGroup, Palette, Rgb};
pub use reports::{AnalysisReport, Summary, SummaryRow};
pub use source::SourceKey;
pub use span::{RawSpan, Span, SpanList};
