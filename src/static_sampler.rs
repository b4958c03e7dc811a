//! A plot filled once from a fixed input range.

use std::time::Duration;

use crate::error::{Result, SamplePlotError};
use crate::function::SampleFunction;
use crate::surface::{AxisLabels, PlotSurface, SamplingSurface, TickOutcome};

/// Yield between idle iterations once the plot is drawn.
pub const STATIC_IDLE_YIELD: Duration = Duration::from_millis(10);

/// Largest sweep a static plot accepts.
pub const MAX_STATIC_POINTS: usize = 10_000_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StaticPhase {
    Idle,
    Sampling,
    Done,
}

/// Sweeps `[x_min, x_max)` in steps of `resolution`, then never changes again.
pub struct StaticSampler {
    surface: PlotSurface,
    x_min: f64,
    x_max: f64,
    resolution: f64,
    steps: usize,
    function: Box<dyn SampleFunction>,
    phase: StaticPhase,
}

impl StaticSampler {
    pub fn new(
        x_min: f64,
        x_max: f64,
        resolution: f64,
        function: Box<dyn SampleFunction>,
        labels: AxisLabels,
    ) -> Result<Self> {
        check_resolution(resolution)?;
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(SamplePlotError::InvalidRange { x_min, x_max });
        }
        let steps = sweep_len(x_min, x_max, resolution)?;
        Ok(Self {
            surface: PlotSurface::new(labels),
            x_min,
            x_max,
            resolution,
            steps,
            function,
            phase: StaticPhase::Idle,
        })
    }

    /// Number of points the sweep produces: `ceil((x_max - x_min) / resolution)`,
    /// or zero for an empty range.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Sample the whole range and refresh the view once. Later calls do nothing.
    pub fn plot(&mut self) {
        if self.phase != StaticPhase::Idle {
            return;
        }
        self.phase = StaticPhase::Sampling;
        for i in 0..self.steps {
            let x = self.x_min + i as f64 * self.resolution;
            let y = self.function.eval(x);
            self.surface.append_point(x, y);
        }
        self.surface.refresh_view();
        self.phase = StaticPhase::Done;
        tracing::debug!(points = self.surface.series().len(), "static sweep done");
    }

    pub fn phase(&self) -> StaticPhase {
        self.phase
    }
}

impl SamplingSurface for StaticSampler {
    fn surface(&self) -> &PlotSurface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut PlotSurface {
        &mut self.surface
    }

    fn tick(&mut self) -> TickOutcome {
        if !self.surface.is_open() {
            return TickOutcome::Stopped;
        }
        if self.phase == StaticPhase::Idle {
            self.plot();
        } else {
            self.surface.request_redraw(STATIC_IDLE_YIELD);
        }
        TickOutcome::Idle
    }
}

pub(crate) fn check_resolution(resolution: f64) -> Result<()> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(())
    } else {
        Err(SamplePlotError::InvalidResolution(resolution))
    }
}

/// `ceil((x_max - x_min) / resolution)`, zero for an empty range.
fn sweep_len(x_min: f64, x_max: f64, resolution: f64) -> Result<usize> {
    let steps = ((x_max - x_min) / resolution).ceil();
    if !steps.is_finite() || steps > MAX_STATIC_POINTS as f64 {
        return Err(SamplePlotError::TooManyPoints {
            steps,
            limit: MAX_STATIC_POINTS,
        });
    }
    Ok(if steps > 0.0 { steps as usize } else { 0 })
}
