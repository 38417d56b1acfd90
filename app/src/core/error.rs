//! # Common Error Types
//!
//! Consolidated error handling for the application.
//!
//! Errors are categorized by their source:
//!
//! - **Asset**: Named image assets that cannot be resolved by the catalog
//! - **Config**: Theme/configuration file IO and parsing failures
//!
//! Missing assets are recoverable at the rendering layer (the view renders
//! nothing in that slot); configuration failures degrade to defaults at the
//! settings handler layer. Neither aborts the application.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `Display` and `Error` come
/// from `thiserror`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Asset catalog lookup failure (unknown asset name).
    #[error("asset error: {0}")]
    Asset(String),

    /// Configuration file failure (IO or parse).
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
