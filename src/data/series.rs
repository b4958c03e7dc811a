//! Append-only storage of sampled points.

/// One sampled `(input, output)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStep {
    pub x: f64,
    pub y: f64,
}

impl SampleStep {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis extents `(x_min, x_max, y_min, y_max)` of the stored data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Ordered inputs and outputs of every sample taken so far.
///
/// `inputs` and `outputs` always have the same length; the only mutations are
/// [`push`](Self::push) and [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesBuffer {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: SampleStep) {
        self.inputs.push(step.x);
        self.outputs.push(step.y);
    }

    /// Drop all points, keeping the allocation.
    pub fn clear(&mut self) {
        self.inputs.clear();
        self.outputs.clear();
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    pub fn last(&self) -> Option<SampleStep> {
        match (self.inputs.last(), self.outputs.last()) {
            (Some(&x), Some(&y)) => Some(SampleStep { x, y }),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = SampleStep> + '_ {
        self.inputs
            .iter()
            .zip(self.outputs.iter())
            .map(|(&x, &y)| SampleStep { x, y })
    }

    /// Points in the `[x, y]` layout egui_plot consumes.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            series: self.clone(),
        }
    }

    /// Extent over finite values only; `None` if there are none on either axis.
    pub fn bounds(&self) -> Option<DataBounds> {
        let x = finite_extent(&self.inputs)?;
        let y = finite_extent(&self.outputs)?;
        Some(DataBounds { x, y })
    }
}

fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Read-only copy of a [`SeriesBuffer`] taken when an export runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    series: SeriesBuffer,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn inputs(&self) -> &[f64] {
        self.series.inputs()
    }

    pub fn outputs(&self) -> &[f64] {
        self.series.outputs()
    }

    pub fn iter(&self) -> impl Iterator<Item = SampleStep> + '_ {
        self.series.iter()
    }

    pub fn bounds(&self) -> Option<DataBounds> {
        self.series.bounds()
    }
}

impl From<Vec<SampleStep>> for Snapshot {
    fn from(steps: Vec<SampleStep>) -> Self {
        let mut series = SeriesBuffer::new();
        for s in steps {
            series.push(s);
        }
        Self { series }
    }
}
