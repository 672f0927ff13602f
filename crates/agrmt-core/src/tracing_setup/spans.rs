//! Span definitions per operation: single measurement and batch.

/// Create a span around one agreement computation.
#[macro_export]
macro_rules! agreement_span {
    ($categories:expr) => {
        tracing::debug_span!("agrmt.agreement", categories = $categories)
    };
}

/// Create a span around a batch of agreement computations.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr, $parallel:expr) => {
        tracing::info_span!("agrmt.batch", batch_size = $batch_size, parallel = $parallel)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AGREEMENT: &str = "agrmt.agreement";
    pub const BATCH: &str = "agrmt.batch";
}
