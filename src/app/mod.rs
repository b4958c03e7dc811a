//! Display glue: drives a sampler from the eframe event loop.
//!
//! | Sub-module  | Responsibility |
//! | ----------- | -------------- |
//! | [`update`]  | Per-frame close handling, ticking, command dispatch and drawing |
//! | [`run`]     | Top-level [`run_sampleplot()`] entry point |
//!
//! Every egui frame is one iteration of the sampling loop. The surface's redraw
//! request becomes `request_repaint_after`, which is how the loop yields to the
//! display between ticks.

mod run;
mod update;

pub use run::run_sampleplot;

use crate::data::hotkeys::Hotkeys;
use crate::panels::{ControlsPanel, PlotPanel};
use crate::surface::SamplingSurface;

/// Last command result shown under the buttons.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

/// Standalone application that implements [`eframe::App`].
pub struct SamplePlotApp {
    sampler: Box<dyn SamplingSurface>,
    hotkeys: Hotkeys,
    controls: Option<ControlsPanel>,
    plot: PlotPanel,
    status: Option<Status>,
}

impl SamplePlotApp {
    /// Wrap `sampler` for display.
    ///
    /// The control bar is only created when the sampler accepts commands, so a
    /// static sweep shows nothing but the chart. The experiment-name box starts
    /// with the sampler's current label.
    pub fn new(sampler: Box<dyn SamplingSurface>, hotkeys: Hotkeys) -> Self {
        let controls = sampler.accepts_commands().then(|| {
            ControlsPanel::new(sampler.experiment_label().unwrap_or_default().to_string())
        });
        Self {
            sampler,
            hotkeys,
            controls,
            plot: PlotPanel::default(),
            status: None,
        }
    }
}
