//! Input validation errors for the agreement measure.

use super::error_code::{self, AgrmtErrorCode};

/// Precondition violations on a frequency or pattern vector.
///
/// All of these are detected before any computation starts and are never
/// recovered internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgreementError {
    #[error("length of vector {len} < {min}, agreement A is not defined")]
    TooFewCategories { len: usize, min: usize },

    #[error("frequency vector must contain integers, got element type {type_name}")]
    NonInteger { type_name: &'static str },

    #[error("negative value {value} found in frequency vector at index {index}")]
    NegativeValue { index: usize, value: f64 },

    #[error("not a pattern vector: value {value} at index {index} (only 0 and 1 are allowed)")]
    InvalidPattern { index: usize, value: u8 },

    #[error("duplicate category value {value}")]
    DuplicateCategory { value: i64 },
}

impl AgrmtErrorCode for AgreementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewCategories { .. } => error_code::LENGTH_ERROR,
            Self::NonInteger { .. } => error_code::TYPE_ERROR,
            Self::NegativeValue { .. } => error_code::NEGATIVE_VALUE,
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            Self::DuplicateCategory { .. } => error_code::DUPLICATE_CATEGORY,
        }
    }
}
