//! # Action Handlers
//!
//! Handler functions that mutate application state. Handlers take the shared
//! `Arc<RwLock<AppState>>`, hold the write lock briefly, and never render.
//!
//! ## Modules
//!
//! - **[`navigation`]**: Screen changes and splash dismissal
//! - **[`settings`]**: Theme configuration load/save

pub mod navigation;
pub mod settings;
