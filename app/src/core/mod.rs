//! # Core Abstractions
//!
//! Foundational types shared across the application.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)

pub mod error;

pub use error::{AppError, Result};
