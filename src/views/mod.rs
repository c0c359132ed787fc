pub mod content;
pub mod header;
pub mod ui_helpers;
