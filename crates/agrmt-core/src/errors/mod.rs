//! Error handling for agrmt.
//! One error enum per subsystem, `thiserror` only.

pub mod agreement_error;
pub mod config_error;
pub mod error_code;

pub use agreement_error::AgreementError;
pub use config_error::ConfigError;
pub use error_code::AgrmtErrorCode;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AgrmtError {
    #[error("agreement error: {0}")]
    Agreement(#[from] AgreementError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AgrmtErrorCode for AgrmtError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Agreement(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type AgrmtResult<T> = Result<T, AgrmtError>;
