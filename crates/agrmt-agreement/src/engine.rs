use rayon::prelude::*;

use agrmt_core::config::{AgreementConfig, AgrmtConfig};
use agrmt_core::errors::{AgrmtError, AgrmtResult};
use agrmt_core::traits::IAgreementMeasure;

use crate::frequency::Frequency;
use crate::layers::{self, AgreementBreakdown};

/// Agreement engine: single measurements, breakdowns, and batches.
pub struct AgreementEngine {
    config: AgreementConfig,
}

impl AgreementEngine {
    /// Create a new AgreementEngine with default settings.
    pub fn new() -> Self {
        Self {
            config: AgreementConfig::default(),
        }
    }

    pub fn with_config(config: AgreementConfig) -> Self {
        Self { config }
    }

    /// Create from the agreement section of a loaded [`AgrmtConfig`].
    pub fn from_config(config: &AgrmtConfig) -> Self {
        Self::with_config(config.agreement.clone())
    }

    pub fn config(&self) -> &AgreementConfig {
        &self.config
    }

    /// Compute agreement A for one frequency vector.
    pub fn calculate<T: Frequency>(&self, frequencies: &[T]) -> AgrmtResult<f64> {
        let _span = agrmt_core::agreement_span!(frequencies.len()).entered();
        Ok(layers::agreement(frequencies)?)
    }

    /// Compute agreement A with a full per-layer breakdown.
    ///
    /// Logs a warning when the layer weights drift from 1.0 by more than the
    /// configured tolerance.
    pub fn calculate_breakdown<T: Frequency>(
        &self,
        frequencies: &[T],
    ) -> AgrmtResult<AgreementBreakdown> {
        let _span = agrmt_core::agreement_span!(frequencies.len()).entered();
        let breakdown = layers::agreement_breakdown(frequencies)?;
        if !breakdown.is_consistent(self.config.weight_tolerance) {
            tracing::warn!(
                weight_sum = breakdown.weight_sum(),
                tolerance = self.config.weight_tolerance,
                "layer weights do not sum to 1"
            );
        }
        Ok(breakdown)
    }

    /// Compute agreement for every vector in `batch`, preserving order.
    ///
    /// Batches at or above `parallel_threshold` are measured on the rayon pool.
    /// One invalid vector does not affect the others.
    pub fn process_batch<T, V>(&self, batch: &[V]) -> Vec<AgrmtResult<f64>>
    where
        T: Frequency,
        V: AsRef<[T]> + Sync,
    {
        let parallel = batch.len() >= self.config.parallel_threshold;
        let _span = agrmt_core::batch_span!(batch.len(), parallel).entered();

        let results: Vec<AgrmtResult<f64>> = if parallel {
            batch
                .par_iter()
                .map(|v| layers::agreement(v.as_ref()).map_err(AgrmtError::from))
                .collect()
        } else {
            batch
                .iter()
                .map(|v| layers::agreement(v.as_ref()).map_err(AgrmtError::from))
                .collect()
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            batch_size = batch.len(),
            failed,
            "agreement batch processed"
        );

        results
    }
}

impl Default for AgreementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IAgreementMeasure for AgreementEngine {
    fn measure(&self, frequencies: &[i64]) -> AgrmtResult<f64> {
        self.calculate(frequencies)
    }
}
