//! Shared plot state and the capability interface implemented by both samplers.

use std::time::Duration;

use crate::command::{Command, CommandOutcome};
use crate::data::run_state::RunState;
use crate::data::series::{SampleStep, SeriesBuffer};
use crate::data::view::ViewState;
use crate::error::{Result, SamplePlotError};

/// Yield handed to the display loop after each refresh.
pub const REFRESH_YIELD: Duration = Duration::from_millis(1);

/// Axis captions drawn on screen and in vector exports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self::new("t", "h(t)")
    }
}

/// Result of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A new point was appended.
    Sampled(SampleStep),
    /// Nothing changed; the loop should yield to the display.
    Idle,
    /// The surface was closed; the loop is over.
    Stopped,
}

/// Buffer, view and lifecycle of a single plot.
///
/// The display loop reads [`take_redraw_request`](Self::take_redraw_request) and
/// [`take_line_dirty`](Self::take_line_dirty) once per frame.
#[derive(Debug, Default)]
pub struct PlotSurface {
    series: SeriesBuffer,
    view: ViewState,
    state: RunState,
    labels: AxisLabels,
    line_dirty: bool,
    clears: u64,
    redraw: Option<Duration>,
}

impl PlotSurface {
    pub fn new(labels: AxisLabels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    pub fn append_point(&mut self, x: f64, y: f64) {
        self.series.push(SampleStep::new(x, y));
        self.line_dirty = true;
    }

    /// Rescale to all accumulated points and ask for a redraw after a short yield.
    pub fn refresh_view(&mut self) {
        self.view.fit(&self.series);
        self.request_redraw(REFRESH_YIELD);
    }

    pub fn on_close(&mut self) {
        self.state = RunState::Stopped;
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Empty the buffer in place and redraw immediately.
    pub fn clear(&mut self) {
        self.series.clear();
        self.clears += 1;
        self.line_dirty = true;
        self.request_redraw(Duration::ZERO);
    }

    /// Keep the shortest pending delay when several requests land in one frame.
    pub fn request_redraw(&mut self, after: Duration) {
        self.redraw = Some(match self.redraw {
            Some(pending) => pending.min(after),
            None => after,
        });
    }

    pub fn take_redraw_request(&mut self) -> Option<Duration> {
        self.redraw.take()
    }

    pub fn take_line_dirty(&mut self) -> bool {
        std::mem::take(&mut self.line_dirty)
    }

    /// Bumped by every [`clear`](Self::clear); cached lines built under an older
    /// value must be rebuilt from scratch.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn series(&self) -> &SeriesBuffer {
        &self.series
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: RunState) {
        self.state = state;
    }

    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

/// A plot surface with its own input-sweep policy.
pub trait SamplingSurface {
    fn surface(&self) -> &PlotSurface;

    fn surface_mut(&mut self) -> &mut PlotSurface;

    /// Run one loop iteration.
    fn tick(&mut self) -> TickOutcome;

    fn on_close(&mut self) {
        self.surface_mut().on_close();
    }

    fn is_open(&self) -> bool {
        self.surface().is_open()
    }

    /// Whether [`handle`](Self::handle) accepts commands at all.
    fn accepts_commands(&self) -> bool {
        false
    }

    fn handle(&mut self, command: Command) -> Result<CommandOutcome> {
        Err(SamplePlotError::UnsupportedCommand(command.name()))
    }

    /// Label used to name CSV exports, if the sampler has one.
    fn experiment_label(&self) -> Option<&str> {
        None
    }
}
