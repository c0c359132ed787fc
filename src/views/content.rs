// Scrollable recipe body drawn below the expanded header.

use eframe::egui::{self, vec2, Color32, Rect, RichText, Rounding, Sense, Stroke, Ui};
use strum::{EnumCount, IntoEnumIterator};

use super::ui_helpers::{icon_info, paint_image, rounded_button, tab_button, ImageScale};
use crate::app::state::{IngredientsTab, ScreenState};
use crate::assets::AssetResolver;
use crate::layout::{chunk_rows, items_per_row, space_between_gap};
use crate::localization::{translate, translate_with};
use crate::recipe::{Ingredient, Recipe};
use crate::ui_constants::{palette, tile, APP_BAR_EXPANDED_HEIGHT, CONTENT_PADDING, PANEL_ROUNDING};

#[derive(Debug, Default, Clone, Copy)]
pub struct ContentActions {
    pub shopping_list_clicked: bool,
    pub see_all_clicked: bool,
}

/// Draws the whole column. `screen_width` drives the ingredients grid, not the
/// padded column width.
pub fn draw_content(
    ui: &mut Ui,
    recipe: &Recipe,
    state: &mut ScreenState,
    assets: &mut dyn AssetResolver,
    screen_width: f32,
) -> ContentActions {
    let mut actions = ContentActions::default();
    ui.add_space(APP_BAR_EXPANDED_HEIGHT);
    egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(CONTENT_PADDING, 0.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            base_information(ui, recipe);

            ui.add_space(20.0);
            ui.label(RichText::new(recipe.description).color(palette::TEXT));
            ui.add_space(20.0);

            servings_calculator(ui, state);
            ingredients_header(ui, state);

            match state.tab() {
                IngredientsTab::Ingredients => {
                    ingredients_list(ui, &recipe.ingredients, assets, screen_width);
                }
                other => {
                    let tab = translate(other.loc_key());
                    ui.add_space(tile::ROW_PADDING);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(translate_with("tab-empty", &[("tab", tab)])).color(palette::DARK_GRAY));
                    });
                    ui.add_space(tile::ROW_PADDING);
                }
            }

            actions.shopping_list_clicked = add_shopping_list_button(ui);
            actions.see_all_clicked = reviews(ui, recipe);
            ui.add_space(CONTENT_PADDING);
        });
    actions
}

fn base_information(ui: &mut Ui, recipe: &Recipe) {
    ui.add_space(16.0);
    ui.columns(3, |cols| {
        icon_info(&mut cols[0], "🕓", &translate("cooking-time"), recipe.cooking_time);
        icon_info(&mut cols[1], "🔥", &translate("energy"), recipe.energy);
        icon_info(&mut cols[2], "⭐", &translate("rating"), recipe.rating);
    });
}

fn servings_calculator(ui: &mut Ui, state: &mut ScreenState) {
    egui::Frame::none()
        .fill(palette::LIGHT_GRAY)
        .rounding(Rounding::same(PANEL_ROUNDING))
        .inner_margin(egui::Margin::symmetric(16.0, 4.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(translate("servings")).color(palette::TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let inc = rounded_button(ui, "+", palette::PINK, true, &translate("servings-increase"));
                    ui.add_space(16.0);
                    ui.label(RichText::new(state.servings().to_string()).color(palette::TEXT));
                    ui.add_space(16.0);
                    let dec = rounded_button(ui, "−", palette::PINK, state.can_decrement(), &translate("servings-decrease"));
                    if inc.clicked() {
                        state.increment_servings();
                    }
                    if dec.clicked() {
                        state.decrement_servings();
                    }
                });
            });
        });
}

fn ingredients_header(ui: &mut Ui, state: &mut ScreenState) {
    const HEIGHT: f32 = 44.0;
    ui.add_space(16.0);
    let width = ui.available_width();
    let bar = Rect::from_min_size(ui.cursor().min, vec2(width, HEIGHT));
    ui.painter().rect_filled(bar, Rounding::same(PANEL_ROUNDING), palette::LIGHT_GRAY);

    let size = tab_size(width, HEIGHT);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for tab in IngredientsTab::iter() {
            if tab_button(ui, &translate(tab.loc_key()), state.tab() == tab, size).clicked() {
                state.select_tab(tab);
            }
        }
    });
    ui.add_space(16.0);
}

/// Tabs share the bar width equally.
fn tab_size(bar_width: f32, height: f32) -> egui::Vec2 {
    vec2(bar_width / IngredientsTab::COUNT as f32, height)
}

fn ingredients_list(ui: &mut Ui, ingredients: &[Ingredient], assets: &mut dyn AssetResolver, screen_width: f32) {
    let per_row = items_per_row(screen_width);
    for row in chunk_rows(ingredients, per_row) {
        ui.add_space(tile::ROW_PADDING);
        let gap = space_between_gap(ui.available_width(), tile::SIZE, row.len());
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            for ingredient in row {
                ui.vertical(|ui| {
                    ui.set_width(tile::SIZE);
                    ingredient_card(ui, ingredient, assets);
                });
            }
        });
        ui.add_space(tile::ROW_PADDING);
    }
}

fn ingredient_card(ui: &mut Ui, ingredient: &Ingredient, assets: &mut dyn AssetResolver) {
    let card_h = tile::SIZE - tile::BOTTOM_GAP;
    let (rect, response) = ui.allocate_exact_size(vec2(tile::SIZE, card_h), Sense::hover());
    response.on_hover_text(ingredient.title);
    let painter = ui.painter();
    painter.rect_filled(rect, Rounding::same(tile::ROUNDING), palette::LIGHT_GRAY);
    let image_rect = rect.shrink(tile::IMAGE_PADDING);
    let texture = assets.resolve(ui.ctx(), ingredient.image);
    let initial: String = ingredient.title.chars().take(1).collect();
    paint_image(painter, image_rect, texture.as_ref(), ImageScale::Fit, &initial, 1.0);

    ui.add_space(tile::BOTTOM_GAP);
    ui.label(RichText::new(ingredient.title).size(14.0).color(palette::TEXT));
    ui.label(RichText::new(ingredient.subtitle).size(14.0).color(palette::DARK_GRAY));
}

fn add_shopping_list_button(ui: &mut Ui) -> bool {
    let text = RichText::new(translate("add-shopping-list")).color(Color32::BLACK);
    let button = egui::Button::new(text)
        .fill(palette::LIGHT_GRAY)
        .stroke(Stroke::NONE)
        .rounding(Rounding::same(PANEL_ROUNDING))
        .min_size(vec2(ui.available_width(), 48.0));
    ui.add(button).clicked()
}

/// Returns true when "See all" was clicked.
fn reviews(ui: &mut Ui, recipe: &Recipe) -> bool {
    let mut see_all = false;
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.set_min_height(25.0);
        ui.label(RichText::new(translate("reviews")).strong().color(palette::TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let link = egui::Label::new(RichText::new(format!("{} ➡", translate("see-all"))).color(palette::PINK))
                .sense(Sense::click())
                .selectable(false);
            see_all = ui
                .add(link)
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked();
        });
    });
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        ui.label(RichText::new(recipe.reviews.photos).color(palette::DARK_GRAY));
        ui.label(RichText::new(recipe.reviews.comment).color(palette::DARK_GRAY));
    });
    see_all
}
