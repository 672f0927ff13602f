// Single source of truth for all default values.

// --- Agreement ---
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-9;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
