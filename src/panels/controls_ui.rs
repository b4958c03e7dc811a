use egui::Ui;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, FLOPPY_DISK, PAUSE, PEN_NIB, PLAY};

use crate::command::Command;
use crate::data::hotkeys::{format_button_tooltip, Hotkeys};

/// Button bar of the live sampler: Pause/Resume, Reset, Vector, experiment name, Save.
///
/// Widgets never touch sampler state; they only produce [`Command`]s.
pub struct ControlsPanel {
    name_input: String,
}

impl ControlsPanel {
    pub fn new(initial_name: impl Into<String>) -> Self {
        Self {
            name_input: initial_name.into(),
        }
    }

    pub fn render(&mut self, ui: &mut Ui, paused: bool, hotkeys: &Hotkeys) -> Vec<Command> {
        let mut commands = Vec::new();
        ui.horizontal(|ui| {
            let (label, tip) = if paused {
                (format!("{PLAY} Resume"), "Resume sampling")
            } else {
                (format!("{PAUSE} Pause"), "Pause sampling")
            };
            if ui
                .button(label)
                .on_hover_text(format_button_tooltip(tip, hotkeys.pause.as_ref()))
                .clicked()
            {
                commands.push(Command::TogglePause);
            }

            if ui
                .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
                .on_hover_text(format_button_tooltip(
                    "Clear all points",
                    hotkeys.reset.as_ref(),
                ))
                .clicked()
            {
                commands.push(Command::Reset);
            }

            if ui
                .button(format!("{PEN_NIB} Vector"))
                .on_hover_text(format_button_tooltip(
                    "Save the plot as SVG",
                    hotkeys.export_vector.as_ref(),
                ))
                .clicked()
            {
                commands.push(Command::ExportVector);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{FLOPPY_DISK} Save"))
                    .on_hover_text(format_button_tooltip(
                        "Save the data as CSV",
                        hotkeys.export_tabular.as_ref(),
                    ))
                    .clicked()
                {
                    commands.push(Command::ExportTabular);
                }

                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.name_input).desired_width(160.0),
                );
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if resp.lost_focus() && enter {
                    commands.push(Command::Rename(self.name_input.clone()));
                }
                ui.label("Exp Name:");
            });
        });
        commands
    }
}
