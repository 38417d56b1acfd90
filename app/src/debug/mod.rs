//! # Logging
//!
//! Tracing-based logging bootstrap, configured from environment variables.
//!
//! ## Modules
//!
//! - **[`config`]**: Log configuration from the environment
//! - **[`logger`]**: Subscriber and file-appender initialization

pub mod config;
pub mod logger;
