// Layout dimensions and palette shared by the header and the content column.

use eframe::egui::Color32;

/// Full header height (image + title bar), in logical points.
pub const APP_BAR_EXPANDED_HEIGHT: f32 = 400.0;

/// Height of the title bar that remains when the header is collapsed.
pub const APP_BAR_COLLAPSED_HEIGHT: f32 = 56.0;

/// Default window size; roughly a phone in portrait.
pub const WINDOW_SIZE: [f32; 2] = [380.0, 800.0];

/// Horizontal padding of the content column.
pub const CONTENT_PADDING: f32 = 16.0;

/// Width reserved for one ingredient tile when deciding items per row.
pub const INGREDIENT_SLOT_WIDTH: f32 = 100.0;

/// Servings counter floor; there is no ceiling.
pub const MIN_SERVINGS: i32 = 1;

pub mod header {
    /// Title font size before scaling.
    pub const TITLE_SIZE: f32 = 26.0;

    /// Base left padding of the title.
    pub const TITLE_PADDING: f32 = 16.0;

    /// Extra left padding gained at full collapse.
    pub const TITLE_PADDING_SHIFT: f32 = 20.0;

    /// Title shrink factor at full collapse.
    pub const TITLE_SCALE_SHRINK: f32 = 0.25;

    /// Shadow depth drawn under the collapsed header.
    pub const ELEVATION: f32 = 4.0;

    /// Gradient starts at this fraction of the image height.
    pub const GRADIENT_START: f32 = 0.4;
}

pub mod button {
    pub const SIZE: f32 = 38.0;
    pub const ROUNDING: f32 = 13.0;
}

pub mod tile {
    /// Ingredient card side.
    pub const SIZE: f32 = 100.0;
    pub const ROUNDING: f32 = 18.0;
    pub const IMAGE_PADDING: f32 = 18.0;
    pub const BOTTOM_GAP: f32 = 8.0;
    pub const ROW_PADDING: f32 = 10.0;
}

/// Large rounding used by the tab bar, servings row and shopping list button.
pub const PANEL_ROUNDING: f32 = 18.0;

pub mod palette {
    use super::Color32;

    pub const PINK: Color32 = Color32::from_rgb(0xF2, 0x60, 0x71);
    pub const GRAY: Color32 = Color32::from_rgb(0x9A, 0x9A, 0x9A);
    pub const LIGHT_GRAY: Color32 = Color32::from_rgb(0xF2, 0xF2, 0xF2);
    pub const DARK_GRAY: Color32 = Color32::from_rgb(0x76, 0x76, 0x76);
    pub const TEXT: Color32 = Color32::from_rgb(0x1F, 0x1F, 0x1F);
}
