// Local UI state of the recipe screen. Lives as long as the screen and is
// mutated only through the methods below.

use eframe::egui::Color32;

use crate::ui_constants::{palette, MIN_SERVINGS};

#[derive(strum::EnumCount, strum::EnumIter, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngredientsTab {
    #[default]
    Ingredients,
    Tools,
    Steps,
}

impl IngredientsTab {
    pub fn loc_key(self) -> &'static str {
        match self {
            IngredientsTab::Ingredients => "tab-ingredients",
            IngredientsTab::Tools => "tab-tools",
            IngredientsTab::Steps => "tab-steps",
        }
    }
}

/// Icon glyph and tint of the favorite button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteStyle {
    pub icon: &'static str,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    favorite: bool,
    servings: i32,
    tab: IngredientsTab,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            favorite: false,
            servings: MIN_SERVINGS,
            tab: IngredientsTab::default(),
        }
    }
}

impl ScreenState {
    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
        log::debug!("favorite -> {}", self.favorite);
    }

    pub fn favorite_style(&self) -> FavoriteStyle {
        if self.favorite {
            FavoriteStyle { icon: "♥", color: palette::PINK }
        } else {
            FavoriteStyle { icon: "♡", color: palette::GRAY }
        }
    }

    pub fn servings(&self) -> i32 {
        self.servings
    }

    pub fn can_decrement(&self) -> bool {
        self.servings > MIN_SERVINGS
    }

    /// No upper bound; saturates instead of overflowing.
    pub fn increment_servings(&mut self) {
        self.servings = self.servings.saturating_add(1);
    }

    /// Returns false when already at the lower bound.
    pub fn decrement_servings(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.servings -= 1;
        true
    }

    pub fn tab(&self) -> IngredientsTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: IngredientsTab) {
        if self.tab != tab {
            log::debug!("tab {} -> {}", self.tab, tab);
            self.tab = tab;
        }
    }
}
