use crate::errors::AgrmtResult;

/// Agreement measure over a frequency vector of ordered categories.
pub trait IAgreementMeasure: Send + Sync {
    /// Compute agreement for `frequencies`, one count per ordered category.
    fn measure(&self, frequencies: &[i64]) -> AgrmtResult<f64>;
}
