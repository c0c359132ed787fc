// Parallax toolbar: photo, gradient and category chip that fade out while the
// header slides up, a title bar that shifts and shrinks, and a fixed row with
// the back and favorite buttons.

use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Id, LayerId, Order, Rect, Rounding};

use super::ui_helpers::{paint_image, rounded_button, ImageScale};
use crate::app::state::FavoriteStyle;
use crate::localization::translate;
use crate::parallax::HeaderParams;
use crate::recipe::Recipe;
use crate::ui_constants::{button, header, palette, APP_BAR_COLLAPSED_HEIGHT, APP_BAR_EXPANDED_HEIGHT, CONTENT_PADDING};

#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderActions {
    pub back_clicked: bool,
    pub favorite_clicked: bool,
}

/// `params.offset` is in physical pixels, `top_inset` in points.
pub fn draw_parallax_header(
    ctx: &egui::Context,
    panel_rect: Rect,
    recipe: &Recipe,
    params: &HeaderParams,
    top_inset: f32,
    photo: Option<&egui::TextureHandle>,
    favorite: FavoriteStyle,
) -> HeaderActions {
    let offset = params.offset / ctx.pixels_per_point();
    let top = panel_rect.top() - offset;
    let header_rect = Rect::from_min_size(
        pos2(panel_rect.left(), top),
        vec2(panel_rect.width(), APP_BAR_EXPANDED_HEIGHT),
    );
    let image_h = APP_BAR_EXPANDED_HEIGHT - APP_BAR_COLLAPSED_HEIGHT;
    let image_rect = Rect::from_min_size(header_rect.min, vec2(header_rect.width(), image_h));
    let title_rect = Rect::from_min_max(pos2(header_rect.left(), image_rect.bottom()), header_rect.max);

    let painter = ctx
        .layer_painter(LayerId::new(Order::Middle, Id::new("parallax_header")))
        .with_clip_rect(panel_rect);

    if params.elevation > 0.0 {
        paint_elevation(&painter, header_rect, params.elevation);
    }
    painter.rect_filled(header_rect, Rounding::ZERO, Color32::WHITE);

    let alpha = params.image_alpha;
    if alpha > 0.0 {
        paint_image(&painter, image_rect, photo, ImageScale::Crop, "🍰", alpha);
        paint_gradient(&painter, image_rect, alpha);
        paint_category_chip(&painter, image_rect, recipe.category, alpha);
    }

    paint_title(&painter, title_rect, recipe.title, params);

    draw_buttons(ctx, panel_rect, top_inset, favorite)
}

fn paint_elevation(painter: &egui::Painter, rect: Rect, depth: f32) {
    let steps = depth.ceil() as usize;
    for i in 0..steps {
        let a = 40u8.saturating_sub((i * 10) as u8);
        let y = rect.bottom() + i as f32;
        let strip = Rect::from_min_max(pos2(rect.left(), y), pos2(rect.right(), y + 1.0));
        painter.rect_filled(strip, Rounding::ZERO, Color32::from_black_alpha(a));
    }
}

fn paint_gradient(painter: &egui::Painter, rect: Rect, alpha: f32) {
    let y0 = rect.top() + rect.height() * header::GRADIENT_START;
    let white = Color32::WHITE.gamma_multiply(alpha);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(pos2(rect.left(), y0), Color32::TRANSPARENT);
    mesh.colored_vertex(pos2(rect.right(), y0), Color32::TRANSPARENT);
    mesh.colored_vertex(pos2(rect.left(), rect.bottom()), white);
    mesh.colored_vertex(pos2(rect.right(), rect.bottom()), white);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

fn paint_category_chip(painter: &egui::Painter, image_rect: Rect, category: &str, alpha: f32) {
    let text_color = palette::TEXT.gamma_multiply(alpha);
    let galley = painter.layout_no_wrap(category.to_string(), FontId::proportional(14.0), text_color);
    let size = galley.size() + vec2(32.0, 12.0);
    let min = pos2(
        image_rect.left() + CONTENT_PADDING,
        image_rect.bottom() - 8.0 - size.y,
    );
    let chip = Rect::from_min_size(min, size);
    painter.rect_filled(chip, Rounding::same(10.0), palette::LIGHT_GRAY.gamma_multiply(alpha));
    painter.galley(chip.min + vec2(16.0, 6.0), galley, text_color);
}

/// Title is padded first and then scaled around its own center.
fn paint_title(painter: &egui::Painter, rect: Rect, title: &str, params: &HeaderParams) {
    let full = painter.layout_no_wrap(title.to_string(), FontId::proportional(header::TITLE_SIZE), palette::TEXT);
    let center = pos2(
        rect.left() + params.title_padding + full.size().x / 2.0,
        rect.center().y,
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(header::TITLE_SIZE * params.title_scale),
        palette::TEXT,
    );
}

fn draw_buttons(ctx: &egui::Context, panel_rect: Rect, top_inset: f32, favorite: FavoriteStyle) -> HeaderActions {
    let mut actions = HeaderActions::default();
    let row_w = panel_rect.width() - 2.0 * CONTENT_PADDING;
    let pos = pos2(
        panel_rect.left() + CONTENT_PADDING,
        panel_rect.top() + top_inset + (APP_BAR_COLLAPSED_HEIGHT - button::SIZE) / 2.0,
    );
    egui::Area::new(Id::new("header_buttons"))
        .order(Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.set_width(row_w);
            ui.horizontal(|ui| {
                actions.back_clicked = rounded_button(ui, "⬅", palette::GRAY, true, &translate("back")).clicked();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    actions.favorite_clicked =
                        rounded_button(ui, favorite.icon, favorite.color, true, &translate("favorite")).clicked();
                });
            });
        });
    actions
}
