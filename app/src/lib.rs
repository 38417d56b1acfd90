//! # NavigAbility Desktop - Library Root
//!
//! Native desktop shell for NavigAbility Solutions, built on **egui** and
//! **eframe**. The application presents the branded splash screen while it
//! boots, then hands off to the home screen.
//!
//! ## Technology Stack
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              navigability (this crate)               │
//! ├──────────────────────────────────────────────────────┤
//! │  egui         - Immediate-mode GUI framework         │
//! │  eframe       - Native window framework              │
//! │  egui_extras  - Image loaders for bundled assets     │
//! │  Tokio        - Background tasks behind the splash   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: Application state, events, and screen orchestration
//! - **[`core`]**: Error types
//! - **[`debug`]**: Logging bootstrap
//! - **[`services`]**: Asset catalog (bundled art by name)
//! - **[`ui`]**: Rendering - screens, widgets, theme, fonts, splash geometry
//! - **[`utils`]**: Shared Tokio runtime
//!
//! ## Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, tasks, handlers)
//!   │     └── ui::theme (palette persistence)
//!   │
//!   └── ui (rendering)
//!         ├── screens::{splash, home}
//!         ├── widgets::{artwork, branding}
//!         ├── layout (splash geometry)
//!         └── services::assets (named art)
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;
