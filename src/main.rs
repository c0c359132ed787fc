#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: logger, settings, localization, window config.
// The screen itself lives in app.rs.

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod assets;
mod layout;
mod localization;
mod logger;
mod parallax;
mod recipe;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();

    let (preferred_lang, window_size) = app::settings::with_settings(|st| (st.language, st.window_size));
    if let Err(e) = localization::initialize_localization(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }
    log::info!("UI language: {}", localization::get_current_language());

    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size([200.0, 300.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app::RecipeApp::from_settings(recipe::strawberry_cake()))
        }),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
