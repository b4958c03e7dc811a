//! Per-frame logic for [`SamplePlotApp`].
//!
//! Order within one frame:
//!
//! 1. a window close request stops the surface;
//! 2. the sampler runs one tick;
//! 3. hotkeys and widget events become [`Command`]s and are handled;
//! 4. the chart is drawn;
//! 5. the surface's pending redraw request is forwarded to egui.

use eframe::egui;

use crate::command::Command;
use crate::surface::TickOutcome;

use super::{SamplePlotApp, Status};

impl SamplePlotApp {
    /// Handle one command. Failures are logged and shown, never propagated.
    pub(crate) fn dispatch(&mut self, command: Command) {
        let name = command.name();
        match self.sampler.handle(command) {
            Ok(outcome) => {
                self.status = Some(Status::Info(outcome.to_string()));
            }
            Err(e) => {
                tracing::error!(command = name, "command failed: {e}");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn frame(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.sampler.on_close();
        }
        if self.sampler.tick() == TickOutcome::Stopped {
            return;
        }

        let mut commands = Vec::new();
        if self.sampler.accepts_commands() && !ctx.wants_keyboard_input() {
            if let Some(cmd) = ctx.input(|i| self.hotkeys.command_for(i)) {
                commands.push(cmd);
            }
        }

        if let Some(controls) = &mut self.controls {
            let paused = self.sampler.surface().state().is_paused();
            egui::TopBottomPanel::bottom("sampleplot_controls").show(ctx, |ui| {
                commands.extend(controls.render(ui, paused, &self.hotkeys));
                match &self.status {
                    Some(Status::Info(msg)) => {
                        ui.label(msg.as_str());
                    }
                    Some(Status::Error(msg)) => {
                        ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
                    }
                    None => {}
                }
            });
        }

        for cmd in commands {
            self.dispatch(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot.render(ui, self.sampler.surface_mut());
        });

        if let Some(after) = self.sampler.surface_mut().take_redraw_request() {
            ctx.request_repaint_after(after);
        }
    }
}

impl eframe::App for SamplePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
