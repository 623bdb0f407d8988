//! Configuration types shared across the orchestrator and demos.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// Global configuration for the `Lamina` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaminaConfig {
    /// Colors, layer alpha, and legend layout used when rendering.
    pub palette: Palette,
    /// Timeout for an individual source call.
    pub source_timeout: Duration,
    /// Optional deadline for the whole fan-out.
    ///
    /// Sources still running when it elapses are abandoned; spans from
    /// sources that already answered are kept.
    pub request_timeout: Option<Duration>,
}

impl Default for LaminaConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            source_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}
