//! Top-level entry point for running the sampler as a native window.
//!
//! [`run_sampleplot`] is the public API for launching the application. It turns a
//! [`SamplePlotConfig`] into a sampler, wraps it in a [`SamplePlotApp`] and enters
//! the eframe event loop.

use eframe::egui;

use crate::config::SamplePlotConfig;

use super::SamplePlotApp;

/// Launch sampleplot in a native window.
///
/// This is the entry point used by the binary. It:
///
/// 1. Builds the static or live sampler described by `cfg.mode`, failing early on
///    an invalid resolution or sweep range.
/// 2. Wraps it in a [`SamplePlotApp`] together with the configured hotkeys.
/// 3. Opens a window titled `cfg.title` at `cfg.window_size`, installs the Phosphor
///    icon font and enters the eframe event loop.
///
/// The call blocks until the window is closed. eframe start-up failures are
/// returned as [`anyhow::Error`].
pub fn run_sampleplot(cfg: SamplePlotConfig) -> anyhow::Result<()> {
    let sampler = cfg.build_sampler()?;
    let app = SamplePlotApp::new(sampler, cfg.hotkeys.clone());

    let [w, h] = cfg.window_size;
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.title.clone())
            .with_inner_size(egui::vec2(w, h)),
        ..Default::default()
    };

    tracing::info!(mode = ?cfg.mode, resolution = cfg.resolution, "opening plot window");
    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
