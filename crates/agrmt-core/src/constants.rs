//! Fixed constants of the agreement measure.

/// Agreement A is not defined below three ordered categories.
pub const MIN_CATEGORIES: usize = 3;

/// Agreement of a frequency vector whose mass sits in a single category.
pub const PERFECT_AGREEMENT: f64 = 1.0;

/// Agreement reported when the formula has no defined value.
pub const LACK_OF_AGREEMENT: f64 = 0.0;

/// Environment variable read by `tracing_setup::init_tracing`.
pub const LOG_ENV_VAR: &str = "AGRMT_LOG";
