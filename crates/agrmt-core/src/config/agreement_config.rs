use serde::{Deserialize, Serialize};

use super::defaults;

/// Agreement subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgreementConfig {
    /// Batch size at or above which batches are measured in parallel.
    pub parallel_threshold: usize,
    /// Allowed deviation of the summed layer weights from 1.0.
    pub weight_tolerance: f64,
}

impl Default for AgreementConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
            weight_tolerance: defaults::DEFAULT_WEIGHT_TOLERANCE,
        }
    }
}
