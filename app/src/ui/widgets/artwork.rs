//! # Artwork Painting
//!
//! Paints image sources into explicit rects with the two scaling modes the
//! splash needs: cover (crop to fill) and fit (contain, no crop). Geometry
//! comes from [`crate::ui::layout`]; texture loading and caching belong to
//! egui's loader infrastructure.

use egui::load::TexturePoll;
use egui::{pos2, Color32, ImageSource, Rect, Ui};

use crate::ui::layout;

const FULL_UV: Rect = Rect {
    min: pos2(0.0, 0.0),
    max: pos2(1.0, 1.0),
};

/// Paint `source` covering `frame`: scaled until both axes cover the frame,
/// cropped about the center. Nothing is painted while the texture is still
/// decoding or if it failed to load.
pub fn paint_cover(ui: &Ui, source: ImageSource<'static>, frame: Rect) {
    match egui::Image::new(source).load_for_size(ui.ctx(), frame.size()) {
        Ok(TexturePoll::Ready { texture }) => {
            let uv = layout::cover_crop_uv(texture.size, frame.size());
            ui.painter().image(texture.id, frame, uv, Color32::WHITE);
        }
        Ok(TexturePoll::Pending { .. }) => {}
        Err(err) => tracing::debug!("artwork failed to load: {err}"),
    }
}

/// Paint `source` fit within `bounds`: largest aspect-preserving size that
/// the bounds contain, centered. Nothing is painted while the texture is
/// still decoding or if it failed to load.
pub fn paint_fit(ui: &Ui, source: ImageSource<'static>, bounds: Rect) {
    match egui::Image::new(source).load_for_size(ui.ctx(), bounds.size()) {
        Ok(TexturePoll::Ready { texture }) => {
            let fitted = layout::fit_size(texture.size, bounds.size());
            let rect = Rect::from_center_size(bounds.center(), fitted);
            ui.painter().image(texture.id, rect, FULL_UV, Color32::WHITE);
        }
        Ok(TexturePoll::Pending { .. }) => {}
        Err(err) => tracing::debug!("artwork failed to load: {err}"),
    }
}
