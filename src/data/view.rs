use super::series::SeriesBuffer;

/// Fraction of the axis span added on each side when drawing.
pub const VIEW_MARGIN: f64 = 0.05;

/// Visible axis ranges plus the autoscale switch.
///
/// While `autoscale` is on, [`fit`](Self::fit) tracks the data extent. A manual
/// zoom or pan switches it off until [`reset`](Self::reset) is called.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
    pub autoscale: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            x_bounds: (0.0, 1.0),
            y_bounds: (0.0, 1.0),
            autoscale: true,
        }
    }
}

impl ViewState {
    /// Fit both axes to the stored points. Empty buffers leave the bounds alone.
    pub fn fit(&mut self, series: &SeriesBuffer) {
        if !self.autoscale {
            return;
        }
        if let Some(b) = series.bounds() {
            self.x_bounds = widen_degenerate(b.x);
            self.y_bounds = widen_degenerate(b.y);
        }
    }

    /// Re-enable automatic scaling.
    pub fn reset(&mut self) {
        self.autoscale = true;
    }

    /// Take bounds chosen by the user and stop autoscaling.
    pub fn set_manual(&mut self, x_bounds: (f64, f64), y_bounds: (f64, f64)) {
        self.x_bounds = x_bounds;
        self.y_bounds = y_bounds;
        self.autoscale = false;
    }

    /// Bounds with [`VIEW_MARGIN`] added on each side.
    pub fn padded(&self) -> ((f64, f64), (f64, f64)) {
        (pad(self.x_bounds), pad(self.y_bounds))
    }
}

/// A single-valued axis gets a span of `max(|center|·5%, 0.5)` on each side.
pub fn widen_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        return (lo, hi);
    }
    let half = (lo.abs() * 0.05).max(0.5);
    (lo - half, hi + half)
}

fn pad((lo, hi): (f64, f64)) -> (f64, f64) {
    let space = (hi - lo) * VIEW_MARGIN;
    (lo - space, hi + space)
}
