// Recipe screen: owns the recipe record, the local UI state and the texture
// cache, and composes the scrollable content with the parallax header.

use eframe::{egui, App};

use crate::assets::{AssetResolver, TextureCache};
use crate::parallax::{self, HeaderParams};
use crate::recipe::Recipe;
use crate::ui_constants::{APP_BAR_COLLAPSED_HEIGHT, APP_BAR_EXPANDED_HEIGHT};
use crate::views::{content, header};

pub mod settings;
pub mod state;

use state::ScreenState;

pub struct RecipeApp {
    recipe: Recipe,
    state: ScreenState,
    assets: TextureCache,
    // Physical pixels, like a status bar inset reported by the platform.
    top_inset_px: f32,
    last_header: Option<HeaderParams>,
    // Applied once on the next frame, in points.
    pending_scroll: Option<f32>,
}

impl RecipeApp {
    pub fn new(recipe: Recipe, assets: TextureCache, top_inset_px: f32) -> Self {
        Self {
            recipe,
            state: ScreenState::default(),
            assets,
            top_inset_px: top_inset_px.max(0.0),
            last_header: None,
            pending_scroll: None,
        }
    }

    /// Builds the screen from the global settings.
    pub fn from_settings(recipe: Recipe) -> Self {
        let (dir, inset) = settings::with_settings(|st| (st.assets_dir.clone(), st.top_inset));
        log::info!("assets directory: {}", dir.to_string_lossy());
        Self::new(recipe, TextureCache::new(dir), inset)
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn header(&self) -> Option<&HeaderParams> {
        self.last_header.as_ref()
    }

    /// Jump the content column to `offset` points on the next frame.
    pub fn scroll_to(&mut self, offset: f32) {
        self.pending_scroll = Some(offset.max(0.0));
    }

    /// One frame of the screen, independent of the eframe window.
    pub fn show(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
            self.scroll_to(0.0);
        }
        let panel_frame = egui::Frame::none().fill(egui::Color32::WHITE);
        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            let panel_rect = ui.max_rect();
            let ppp = ctx.pixels_per_point();
            let screen_width = ctx.screen_rect().width();

            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if let Some(offset) = self.pending_scroll.take() {
                scroll = scroll.vertical_scroll_offset(offset);
            }
            let output = scroll.show(ui, |ui| {
                content::draw_content(ui, &self.recipe, &mut self.state, &mut self.assets, screen_width)
            });
            let actions = output.inner;
            if actions.shopping_list_clicked {
                log::info!("add to shopping list: {}", self.recipe.title);
            }
            if actions.see_all_clicked {
                log::info!("see all reviews: {}", self.recipe.title);
            }

            let max_offset = parallax::max_offset(
                APP_BAR_EXPANDED_HEIGHT - APP_BAR_COLLAPSED_HEIGHT,
                ppp,
                self.top_inset_px,
            );
            let params = parallax::header_params(output.state.offset.y * ppp, max_offset);
            self.track_collapse(&params);

            let photo = self.assets.resolve(ctx, self.recipe.header_image);
            let header_actions = header::draw_parallax_header(
                ctx,
                panel_rect,
                &self.recipe,
                &params,
                self.top_inset_px / ppp,
                photo.as_ref(),
                self.state.favorite_style(),
            );
            if header_actions.favorite_clicked {
                self.state.toggle_favorite();
                ctx.request_repaint();
            }
            if header_actions.back_clicked {
                log::info!("back pressed; closing");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn track_collapse(&mut self, params: &HeaderParams) {
        let was = self.last_header.map(|p| p.is_collapsed());
        if was != Some(params.is_collapsed()) {
            log::debug!(
                "header {} (offset {:.0}px)",
                if params.is_collapsed() { "collapsed" } else { "expanded" },
                params.offset
            );
        }
        self.last_header = Some(*params);
    }
}

impl App for RecipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::strawberry_cake;

    fn raw_input() -> egui::RawInput {
        input_with_height(800.0)
    }

    fn input_with_height(height: f32) -> egui::RawInput {
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(380.0, height));
        egui::RawInput {
            screen_rect: Some(screen),
            ..Default::default()
        }
    }

    fn test_app() -> RecipeApp {
        let mut dir = std::env::temp_dir();
        dir.push(format!("recipe_app_assets_{}", std::process::id()));
        RecipeApp::new(strawberry_cake(), TextureCache::new(dir), 0.0)
    }

    #[test]
    fn first_frame_shows_expanded_header() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        let _ = ctx.run(raw_input(), |ctx| app.show(ctx));

        let header = app.header().expect("header computed");
        assert_eq!(header.progress, 0.0);
        assert!(!header.is_collapsed());
        assert_eq!(app.state().servings(), 1);
        assert!(!app.state().is_favorite());
    }

    #[test]
    fn every_image_is_resolved_once() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        for _ in 0..3 {
            let _ = ctx.run(raw_input(), |ctx| app.show(ctx));
        }
        // header photo + seven ingredient thumbnails
        assert_eq!(app.assets.cached_len(), 8);
    }

    #[test]
    fn scrolling_past_image_collapses_header() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        // Short window so the column is tall enough to scroll well past the photo.
        let _ = ctx.run(input_with_height(500.0), |ctx| app.show(ctx));
        assert!(!app.header().expect("header computed").is_collapsed());

        app.scroll_to(350.0);
        for _ in 0..2 {
            let _ = ctx.run(input_with_height(500.0), |ctx| app.show(ctx));
        }

        let header = app.header().expect("header computed");
        assert_eq!(header.offset, 344.0);
        assert_eq!(header.progress, 1.0);
        assert_eq!(header.image_alpha, 0.0);
        assert!(header.is_collapsed());
    }

    #[test]
    fn negative_inset_is_ignored() {
        let app = RecipeApp::new(strawberry_cake(), TextureCache::new("assets"), -12.0);
        assert_eq!(app.top_inset_px, 0.0);
    }
}
