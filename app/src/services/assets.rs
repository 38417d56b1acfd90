//! # Asset Catalog
//!
//! Named image assets bundled into the binary. Views reference art by name
//! only; resolution and decoding stay behind this boundary (decoding is done
//! by egui's image loaders, installed at startup via
//! `egui_extras::install_image_loaders`).
//!
//! The returned sources use stable `bytes://` URIs so egui's texture cache
//! keys each asset once, however often a frame re-requests it.

use crate::core::error::{AppError, Result};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Splash background art
pub const BG_SPLASH: &str = "BgSplash";
/// Application logo
pub const APP_LOGO: &str = "AppLogo";

static BG_SPLASH_BYTES: &[u8] = include_bytes!("../../assets/BgSplash.png");
static APP_LOGO_BYTES: &[u8] = include_bytes!("../../assets/AppLogo.png");

static CATALOG: Lazy<HashMap<&'static str, &'static [u8]>> = Lazy::new(|| {
    HashMap::from([
        (BG_SPLASH, BG_SPLASH_BYTES),
        (APP_LOGO, APP_LOGO_BYTES),
    ])
});

/// Resolve a named asset to an image source for egui's loaders.
///
/// Unknown names are an [`AppError::Asset`]; callers render nothing in the
/// slot and keep going.
pub fn image(name: &str) -> Result<egui::ImageSource<'static>> {
    let bytes = *CATALOG
        .get(name)
        .ok_or_else(|| AppError::Asset(format!("unknown image asset: {name}")))?;
    Ok(egui::ImageSource::Bytes {
        uri: Cow::Owned(format!("bytes://{name}.png")),
        bytes: egui::load::Bytes::Static(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_assets_resolve() {
        assert!(image(BG_SPLASH).is_ok());
        assert!(image(APP_LOGO).is_ok());
    }

    #[test]
    fn unknown_asset_is_an_error() {
        let err = image("NoSuchArt").unwrap_err();
        assert!(err.to_string().contains("NoSuchArt"));
    }

    #[test]
    fn sources_use_stable_byte_uris() {
        match image(APP_LOGO).unwrap() {
            egui::ImageSource::Bytes { uri, .. } => assert_eq!(uri, "bytes://AppLogo.png"),
            _ => panic!("unexpected source kind"),
        }
    }
}
