//! # Widget Helpers
//!
//! Reusable rendering components shared across screens.
//!
//! ## Modules
//!
//! - **[`artwork`]**: Cover/fit image painting through egui's loaders
//! - **[`branding`]**: Brand text (title, subtitle, footer)

pub mod artwork;
pub mod branding;
