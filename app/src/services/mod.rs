//! # External Resources
//!
//! Access to resources outside the widget tree.
//!
//! ## Modules
//!
//! - **[`assets`]**: Named image-asset catalog (bundled art)

pub mod assets;
