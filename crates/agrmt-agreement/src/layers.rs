//! Layered decomposition of a frequency vector and aggregation of agreement.
//!
//! Each iteration takes the categories still holding mass, scores their
//! pattern, and removes the smallest remaining count from all of them.
//! At least one category empties per layer, so a vector of `k` categories
//! yields at most `k` layers.

use agrmt_core::constants::LACK_OF_AGREEMENT;
use agrmt_core::errors::AgreementError;

use crate::frequency::{self, Frequency};
use crate::pattern::pattern_agreement;

/// One slice of observations shared uniformly by the active categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Categories still holding mass at this layer.
    pub pattern: Vec<u8>,
    /// Count taken from every active category.
    pub magnitude: f64,
    /// Share of all observations held by this layer.
    pub weight: f64,
    /// Agreement A of `pattern`.
    pub agreement: f64,
}

/// Agreement with the full per-layer decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementBreakdown {
    pub categories: usize,
    /// Total number of observations (n).
    pub total: f64,
    pub layers: Vec<Layer>,
    /// Σ weight · agreement over `layers`.
    pub agreement: f64,
}

impl AgreementBreakdown {
    pub fn weight_sum(&self) -> f64 {
        self.layers.iter().map(|l| l.weight).sum()
    }

    /// Whether the layer weights sum to 1.0 within `tolerance`.
    /// An empty vector has no layers and is trivially consistent.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        if self.layers.is_empty() {
            return self.total == 0.0;
        }
        (self.weight_sum() - 1.0).abs() <= tolerance
    }
}

/// Agreement A of a frequency vector.
///
/// Fails with [`AgreementError::TooFewCategories`] below three categories,
/// [`AgreementError::NonInteger`] for float element types, and
/// [`AgreementError::NegativeValue`] for negative counts.
/// An all-zero vector has agreement 0.0.
pub fn agreement<T: Frequency>(frequencies: &[T]) -> Result<f64, AgreementError> {
    agreement_breakdown(frequencies).map(|b| b.agreement)
}

/// Agreement A of a frequency vector with its layer decomposition.
pub fn agreement_breakdown<T: Frequency>(
    frequencies: &[T],
) -> Result<AgreementBreakdown, AgreementError> {
    let mut remainder = frequency::validate(frequencies).inspect_err(|e| {
        tracing::debug!(error = %e, "rejected frequency vector");
    })?;

    let k = remainder.len();
    let total: f64 = remainder.iter().sum();

    if total == 0.0 {
        return Ok(AgreementBreakdown {
            categories: k,
            total,
            layers: Vec::new(),
            agreement: LACK_OF_AGREEMENT,
        });
    }

    let mut layers = Vec::with_capacity(k);
    let mut overall = 0.0;

    for _ in 0..k {
        let pattern: Vec<u8> = remainder.iter().map(|&r| u8::from(r != 0.0)).collect();
        if pattern.iter().all(|&p| p == 0) {
            break;
        }

        let a = pattern_agreement(&pattern)?;

        let magnitude = remainder
            .iter()
            .copied()
            .filter(|&r| r > 0.0)
            .reduce(f64::min)
            .unwrap_or(0.0);

        let active = pattern.iter().filter(|&&p| p == 1).count() as f64;
        let weight = active * magnitude / total;
        overall += weight * a;

        for (r, &p) in remainder.iter_mut().zip(&pattern) {
            if p == 1 {
                *r -= magnitude;
            }
        }

        tracing::trace!(
            layer = layers.len(),
            magnitude,
            weight,
            agreement = a,
            "layer peeled"
        );

        layers.push(Layer {
            pattern,
            magnitude,
            weight,
            agreement: a,
        });
    }

    Ok(AgreementBreakdown {
        categories: k,
        total,
        layers,
        agreement: overall,
    })
}
