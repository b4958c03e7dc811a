//! A plot that grows by one sample per loop iteration.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::command::{Command, CommandOutcome};
use crate::data::run_state::RunState;
use crate::data::series::SampleStep;
use crate::error::Result;
use crate::export::{tabular, vector, ExportSettings};
use crate::function::SampleFunction;
use crate::static_sampler::check_resolution;
use crate::surface::{AxisLabels, PlotSurface, SamplingSurface, TickOutcome};

/// Yield while paused.
pub const PAUSED_YIELD: Duration = Duration::from_millis(1);

/// Default experiment label used in CSV file names.
pub const DEFAULT_EXPERIMENT_LABEL: &str = "Experiment";

/// Samples `f(t)` at `t = 0, r, 2r, …` until closed.
///
/// The time cursor counts samples taken, so inputs are exact multiples of the
/// resolution. Neither pausing nor [`Command::Reset`] rewinds it.
pub struct LiveSampler {
    surface: PlotSurface,
    resolution: f64,
    function: Box<dyn SampleFunction>,
    next_index: u64,
    experiment_label: String,
    export: ExportSettings,
}

impl LiveSampler {
    pub fn new(
        resolution: f64,
        function: Box<dyn SampleFunction>,
        labels: AxisLabels,
        export: ExportSettings,
    ) -> Result<Self> {
        check_resolution(resolution)?;
        Ok(Self {
            surface: PlotSurface::new(labels),
            resolution,
            function,
            next_index: 0,
            experiment_label: DEFAULT_EXPERIMENT_LABEL.to_string(),
            export,
        })
    }

    pub fn with_experiment_label(mut self, label: impl Into<String>) -> Self {
        self.experiment_label = label.into();
        self
    }

    /// Input of the next sample.
    pub fn next_input(&self) -> f64 {
        self.next_index as f64 * self.resolution
    }

    pub fn experiment_label(&self) -> &str {
        &self.experiment_label
    }

    pub fn toggle_pause(&mut self) -> CommandOutcome {
        let next = self.surface.state().toggled();
        self.surface.set_state(next);
        match next {
            RunState::Paused => {
                tracing::debug!(t = self.next_input(), "sampling paused");
                CommandOutcome::Paused
            }
            RunState::Running => {
                self.surface.reset_view();
                tracing::debug!(t = self.next_input(), "sampling resumed");
                CommandOutcome::Resumed
            }
            RunState::Stopped => CommandOutcome::Ignored,
        }
    }

    pub fn reset(&mut self) -> CommandOutcome {
        self.surface.clear();
        self.surface.reset_view();
        tracing::debug!(t = self.next_input(), "buffer cleared");
        CommandOutcome::Cleared
    }

    pub fn rename(&mut self, label: String) -> CommandOutcome {
        tracing::debug!(from = %self.experiment_label, to = %label, "experiment renamed");
        self.experiment_label = label.clone();
        CommandOutcome::Renamed(label)
    }

    pub fn export_tabular(&self, now: NaiveDateTime) -> Result<CommandOutcome> {
        let snapshot = self.surface.series().snapshot();
        let dir = self.export.prepare_output_dir()?;
        let path = tabular::export_csv(dir, &self.experiment_label, now, &snapshot)?;
        tracing::info!(path = %path.display(), points = snapshot.len(), "data saved to file");
        Ok(CommandOutcome::Exported(path))
    }

    pub fn export_vector(&self, now: NaiveDateTime) -> Result<CommandOutcome> {
        let snapshot = self.surface.series().snapshot();
        let dir = self.export.prepare_output_dir()?;
        let path = vector::export_svg(
            dir,
            now,
            &snapshot,
            self.surface.labels(),
            &self.export.vector,
        )?;
        tracing::info!(path = %path.display(), points = snapshot.len(), "vector plot saved");
        Ok(CommandOutcome::Exported(path))
    }

    /// Dispatch `command` using `now` for export file names.
    pub fn handle_at(&mut self, command: Command, now: NaiveDateTime) -> Result<CommandOutcome> {
        match command {
            Command::TogglePause => Ok(self.toggle_pause()),
            Command::Reset => Ok(self.reset()),
            Command::Rename(label) => Ok(self.rename(label)),
            Command::ExportTabular => self.export_tabular(now),
            Command::ExportVector => self.export_vector(now),
        }
    }
}

impl SamplingSurface for LiveSampler {
    fn surface(&self) -> &PlotSurface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut PlotSurface {
        &mut self.surface
    }

    fn tick(&mut self) -> TickOutcome {
        match self.surface.state() {
            RunState::Stopped => TickOutcome::Stopped,
            RunState::Paused => {
                self.surface.request_redraw(PAUSED_YIELD);
                TickOutcome::Idle
            }
            RunState::Running => {
                let t = self.next_input();
                let y = self.function.eval(t);
                self.surface.append_point(t, y);
                self.surface.refresh_view();
                self.next_index += 1;
                TickOutcome::Sampled(SampleStep::new(t, y))
            }
        }
    }

    fn accepts_commands(&self) -> bool {
        true
    }

    fn handle(&mut self, command: Command) -> Result<CommandOutcome> {
        self.handle_at(command, Local::now().naive_local())
    }

    fn experiment_label(&self) -> Option<&str> {
        Some(&self.experiment_label)
    }
}
