//! # Background Tasks
//!
//! Async tasks spawned on the shared Tokio runtime. Tasks never touch state
//! directly; they send [`crate::app::AppEvent`]s back to the main thread.
//!
//! ## Modules
//!
//! - **[`boot`]**: Startup work and the splash minimum-hold timer

pub mod boot;
