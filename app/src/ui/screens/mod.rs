//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one screen.
//!
//! - **[`splash`]**: Branded splash shown while the application boots
//! - **[`home`]**: Main screen, the destination of the splash hand-off
//!
//! ## Rendering Pattern
//!
//! Screens receive a cloned state snapshot and render without taking locks:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState) {
//!     // read the snapshot, paint widgets
//! }
//! ```
//!
//! Navigation is never initiated from inside a screen here: the splash is
//! dismissed by the shell when boot progress arrives (see
//! [`crate::app::handlers::navigation`]).

pub mod home;
pub mod splash;
