//! Stable string codes for every error variant.

/// Maps an error to a stable, machine-readable code.
pub trait AgrmtErrorCode {
    /// Returns the error code string (e.g., "LENGTH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LENGTH_ERROR: &str = "LENGTH_ERROR";
pub const TYPE_ERROR: &str = "TYPE_ERROR";
pub const NEGATIVE_VALUE: &str = "NEGATIVE_VALUE";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const DUPLICATE_CATEGORY: &str = "DUPLICATE_CATEGORY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
