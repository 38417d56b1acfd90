//! # Splash Geometry
//!
//! Pure layout math for the splash screen, kept out of the render path so
//! the visual contract is testable without a window.
//!
//! The background art covers a frame 15% larger than the screen, cropped
//! rather than letterboxed, with a 20-unit gap reserved below the image
//! within its frame. The logo fits inside a fixed 200×200 box.

use egui::{pos2, vec2, Rect, Vec2};

/// Background frame overscan relative to the screen (both axes).
pub const BACKGROUND_OVERSCAN: f32 = 1.15;
/// Gap reserved below the background image within its frame.
pub const BACKGROUND_BOTTOM_GAP: f32 = 20.0;
/// Side length of the square box the logo fits into.
pub const LOGO_BOX: f32 = 200.0;

/// Frame the background art covers: 1.15× the screen on both axes,
/// centered, shifted up by half the bottom gap so the gap sits below the
/// image.
pub fn background_frame(screen: Rect) -> Rect {
    let size = screen.size() * BACKGROUND_OVERSCAN;
    let center = screen.center() - vec2(0.0, BACKGROUND_BOTTOM_GAP / 2.0);
    Rect::from_center_size(center, size)
}

/// UV sub-rect of an image that covers `frame` (scaled-to-fill).
///
/// The image is scaled until both axes cover the frame, then cropped about
/// its center; the returned rect selects the visible portion in [0,1]²
/// texture coordinates. Degenerate sizes fall back to the full image.
pub fn cover_crop_uv(image: Vec2, frame: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || frame.x <= 0.0 || frame.y <= 0.0 {
        return full;
    }
    let scale = (frame.x / image.x).max(frame.y / image.y);
    // Portion of the image (in image pixels) that stays visible after the crop.
    let visible = frame / scale;
    let uv_size = vec2(visible.x / image.x, visible.y / image.y);
    Rect::from_center_size(pos2(0.5, 0.5), uv_size)
}

/// Largest size with the image's aspect ratio contained by `bounds`
/// (scaled-to-fit). Grows small images as well as shrinking large ones.
pub fn fit_size(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y);
    image * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(w: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(w, h))
    }

    #[test]
    fn background_frame_is_15_percent_oversized() {
        for (w, h) in [(390.0, 844.0), (320.0, 480.0), (1366.0, 768.0)] {
            let frame = background_frame(screen(w, h));
            assert!((frame.width() - 1.15 * w).abs() < 1e-3);
            assert!((frame.height() - 1.15 * h).abs() < 1e-3);
        }
    }

    #[test]
    fn background_frame_matches_reference_phone_screen() {
        // 390×844 portrait: the documented reference scenario.
        let frame = background_frame(screen(390.0, 844.0));
        assert!((frame.width() - 448.5).abs() < 1e-3);
        assert!((frame.height() - 970.6).abs() < 1e-3);
        // Frame center sits half the bottom gap above the screen center.
        let expected_center_y = 844.0 / 2.0 - BACKGROUND_BOTTOM_GAP / 2.0;
        assert!((frame.center().y - expected_center_y).abs() < 1e-3);
        assert!((frame.center().x - 195.0).abs() < 1e-3);
    }

    #[test]
    fn background_frame_is_deterministic() {
        let a = background_frame(screen(390.0, 844.0));
        let b = background_frame(screen(390.0, 844.0));
        assert_eq!(a, b);
    }

    #[test]
    fn cover_crop_selects_centered_matching_aspect() {
        // Wide image into a square frame: crop left and right.
        let uv = cover_crop_uv(vec2(1000.0, 500.0), vec2(100.0, 100.0));
        assert!((uv.min.x - 0.25).abs() < 1e-5);
        assert!((uv.max.x - 0.75).abs() < 1e-5);
        assert!((uv.min.y - 0.0).abs() < 1e-5);
        assert!((uv.max.y - 1.0).abs() < 1e-5);

        // Selected region has the frame's aspect ratio in image pixels.
        let image = vec2(390.0, 844.0);
        let frame = vec2(448.5, 970.6);
        let uv = cover_crop_uv(image, frame);
        let region = vec2(uv.width() * image.x, uv.height() * image.y);
        assert!((region.x / region.y - frame.x / frame.y).abs() < 1e-4);
    }

    #[test]
    fn cover_crop_stays_within_texture_bounds() {
        for (img, frame) in [
            (vec2(100.0, 100.0), vec2(448.5, 970.6)),
            (vec2(4000.0, 100.0), vec2(390.0, 844.0)),
            (vec2(390.0, 844.0), vec2(390.0, 844.0)),
        ] {
            let uv = cover_crop_uv(img, frame);
            assert!(uv.min.x >= -1e-5 && uv.min.y >= -1e-5);
            assert!(uv.max.x <= 1.0 + 1e-5 && uv.max.y <= 1.0 + 1e-5);
            assert!((uv.center().x - 0.5).abs() < 1e-5);
            assert!((uv.center().y - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn cover_crop_degenerate_input_falls_back_to_full_image() {
        let uv = cover_crop_uv(vec2(0.0, 0.0), vec2(100.0, 100.0));
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn fit_size_preserves_aspect_within_logo_box() {
        let bounds = Vec2::splat(LOGO_BOX);

        // Wide logo: width pinned to the box.
        let fitted = fit_size(vec2(400.0, 200.0), bounds);
        assert_eq!(fitted, vec2(200.0, 100.0));

        // Tall logo: height pinned.
        let fitted = fit_size(vec2(100.0, 400.0), bounds);
        assert_eq!(fitted, vec2(50.0, 200.0));

        // Small square logo grows to fill the box exactly.
        let fitted = fit_size(vec2(64.0, 64.0), bounds);
        assert_eq!(fitted, vec2(200.0, 200.0));
    }

    #[test]
    fn fit_size_never_exceeds_bounds() {
        for img in [vec2(256.0, 256.0), vec2(1.0, 999.0), vec2(999.0, 1.0)] {
            let fitted = fit_size(img, Vec2::splat(LOGO_BOX));
            assert!(fitted.x <= LOGO_BOX + 1e-4);
            assert!(fitted.y <= LOGO_BOX + 1e-4);
            let ratio = (fitted.x / fitted.y) / (img.x / img.y);
            assert!((ratio - 1.0).abs() < 1e-4);
        }
    }
}
