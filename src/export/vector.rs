//! Vector (SVG) export.
//!
//! The chart is drawn on a throwaway plotters surface built only from the
//! snapshot, so none of the interactive widgets end up in the file.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::series::Snapshot;
use crate::data::view::{widen_degenerate, ViewState};
use crate::error::{Result, SamplePlotError};
use crate::surface::AxisLabels;

use super::timestamp;

/// Look of the exported drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStyle {
    /// Canvas width in SVG user units (default: 1024)
    pub width: u32,
    /// Canvas height in SVG user units (default: 768)
    pub height: u32,
    /// Line colour as RGB (default: matplotlib blue)
    pub line_color: [u8; 3],
    /// Line thickness (default: 2)
    pub line_width: u32,
    /// Draw grid lines (default: true)
    pub show_grid: bool,
}

impl Default for VectorStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            line_color: [31, 119, 180],
            line_width: 2,
            show_grid: true,
        }
    }
}

/// `plot_<timestamp>`, without an extension.
pub fn file_name(now: NaiveDateTime) -> String {
    format!("plot_{}", timestamp(now))
}

/// Draw axes, labels, grid and the sampled line into an SVG document.
pub fn render_svg(snapshot: &Snapshot, labels: &AxisLabels, style: &VectorStyle) -> Result<String> {
    let mut view = ViewState::default();
    if let Some(b) = snapshot.bounds() {
        view.x_bounds = widen_degenerate(b.x);
        view.y_bounds = widen_degenerate(b.y);
    }
    let ((x0, x1), (y0, y1)) = view.padded();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE).map_err(SamplePlotError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(SamplePlotError::render)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(labels.x.as_str()).y_desc(labels.y.as_str());
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(SamplePlotError::render)?;

        let [r, g, b] = style.line_color;
        chart
            .draw_series(LineSeries::new(
                snapshot
                    .iter()
                    .filter(|s| s.x.is_finite() && s.y.is_finite())
                    .map(|s| (s.x, s.y)),
                RGBColor(r, g, b).stroke_width(style.line_width),
            ))
            .map_err(SamplePlotError::render)?;

        root.present().map_err(SamplePlotError::render)?;
    }
    Ok(svg)
}

/// Render `snapshot` and write it into `dir`, returning the created path.
pub fn export_svg(
    dir: &Path,
    now: NaiveDateTime,
    snapshot: &Snapshot,
    labels: &AxisLabels,
    style: &VectorStyle,
) -> Result<PathBuf> {
    let svg = render_svg(snapshot, labels, style)?;
    let path = dir.join(file_name(now));
    std::fs::write(&path, svg).map_err(|e| SamplePlotError::io(&path, e))?;
    Ok(path)
}
