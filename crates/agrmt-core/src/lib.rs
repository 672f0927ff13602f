//! # agrmt-core
//!
//! Foundation crate for the agrmt workspace.
//! Defines errors, config, constants, traits, and tracing setup.
//! The agreement crate and the test fixtures depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::AgrmtConfig;
pub use errors::{AgreementError, AgrmtError, AgrmtResult, ConfigError};
pub use traits::IAgreementMeasure;
