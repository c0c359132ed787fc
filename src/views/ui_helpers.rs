use eframe::egui::{self, pos2, vec2, Align2, Color32, CursorIcon, FontId, Rect, Response, RichText, Rounding, Sense, Ui};

use crate::layout::{center_crop_uv, fit_size};
use crate::ui_constants::{button, palette, PANEL_ROUNDING};

/// Square white button with a tinted glyph. Disabled buttons are drawn faded
/// and never report clicks.
pub fn rounded_button(ui: &mut Ui, glyph: &str, tint: Color32, enabled: bool, description: &str) -> Response {
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(vec2(button::SIZE, button::SIZE), sense);
    paint_rounded_button(ui.painter(), rect, glyph, tint, enabled, response.hovered());
    let response = response.on_hover_text(description);
    if enabled {
        response.on_hover_cursor(CursorIcon::PointingHand)
    } else {
        response
    }
}

pub fn paint_rounded_button(
    painter: &egui::Painter,
    rect: Rect,
    glyph: &str,
    tint: Color32,
    enabled: bool,
    hovered: bool,
) {
    let fill = if hovered && enabled {
        Color32::from_gray(246)
    } else {
        Color32::WHITE
    };
    painter.rect_filled(rect, Rounding::same(button::ROUNDING), fill);
    let color = if enabled { tint } else { tint.gamma_multiply(0.35) };
    painter.text(rect.center(), Align2::CENTER_CENTER, glyph, FontId::proportional(18.0), color);
}

/// One segment of the tab bar. Returns the click response.
pub fn tab_button(ui: &mut Ui, text: &str, active: bool, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let (fill, color) = if active {
        (palette::PINK, Color32::WHITE)
    } else {
        (palette::LIGHT_GRAY, palette::DARK_GRAY)
    };
    let painter = ui.painter();
    painter.rect_filled(rect, Rounding::same(PANEL_ROUNDING), fill);
    painter.text(rect.center(), Align2::CENTER_CENTER, text, FontId::proportional(14.0), color);
    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Pink glyph above a bold value, e.g. cooking time.
pub fn icon_info(ui: &mut Ui, glyph: &str, description: &str, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(glyph).size(22.0).color(palette::PINK))
            .on_hover_text(description);
        ui.add_space(2.0);
        ui.label(RichText::new(text).strong().color(palette::TEXT));
    });
}

/// How a texture is mapped into its target rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageScale {
    /// Fill the rect, trimming the long axis.
    Crop,
    /// Whole image visible, centered, letterboxed.
    Fit,
}

/// Screen rect and UV rect for drawing a `texture_size` image into `rect`.
pub fn image_placement(rect: Rect, texture_size: [usize; 2], scale: ImageScale) -> (Rect, Rect) {
    let image = [texture_size[0] as f32, texture_size[1] as f32];
    let target = [rect.width(), rect.height()];
    match scale {
        ImageScale::Crop => {
            let [u0, v0, u1, v1] = center_crop_uv(image, target);
            (rect, Rect::from_min_max(pos2(u0, v0), pos2(u1, v1)))
        }
        ImageScale::Fit => {
            let [w, h] = fit_size(image, target);
            let full_uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            (Rect::from_center_size(rect.center(), vec2(w, h)), full_uv)
        }
    }
}

/// Draw `texture` into `rect`, or a flat placeholder with a glyph when the
/// asset could not be resolved.
pub fn paint_image(
    painter: &egui::Painter,
    rect: Rect,
    texture: Option<&egui::TextureHandle>,
    scale: ImageScale,
    placeholder_glyph: &str,
    alpha: f32,
) {
    let tint = Color32::WHITE.gamma_multiply(alpha);
    match texture {
        Some(tex) => {
            let (target, uv) = image_placement(rect, tex.size(), scale);
            painter.image(tex.id(), target, uv, tint);
        }
        None => {
            painter.rect_filled(rect, Rounding::ZERO, palette::LIGHT_GRAY.gamma_multiply(alpha));
            let size = (rect.height() * 0.3).clamp(12.0, 64.0);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                placeholder_glyph,
                FontId::proportional(size),
                palette::GRAY.gamma_multiply(alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_letterboxes_wide_thumbnail_inside_tile() {
        let rect = Rect::from_min_size(pos2(18.0, 18.0), vec2(64.0, 56.0));
        let (target, uv) = image_placement(rect, [128, 64], ImageScale::Fit);
        assert_eq!(target.size(), vec2(64.0, 32.0));
        assert_eq!(target.center(), rect.center());
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn crop_fills_rect_and_trims_uv() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let (target, uv) = image_placement(rect, [400, 200], ImageScale::Crop);
        assert_eq!(target, rect);
        assert_eq!(uv, Rect::from_min_max(pos2(0.25, 0.0), pos2(0.75, 1.0)));
    }
}
