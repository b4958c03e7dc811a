use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints};

use crate::surface::PlotSurface;

const LINE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

/// Chart area. Keeps a copy of the line that only grows by the newly appended
/// points, and starts over after the buffer was cleared.
#[derive(Default)]
pub struct PlotPanel {
    line: Vec<PlotPoint>,
    clears: u64,
}

impl PlotPanel {
    /// Bring the cached line in sync with `surface` when it changed.
    pub fn sync_line(&mut self, surface: &mut PlotSurface) {
        if !surface.take_line_dirty() {
            return;
        }
        let series = surface.series();
        if self.clears != surface.clear_count() || series.len() < self.line.len() {
            self.line.clear();
            self.clears = surface.clear_count();
        }
        let known = self.line.len();
        self.line
            .extend(series.iter().skip(known).map(|s| PlotPoint::new(s.x, s.y)));
    }

    pub fn line(&self) -> &[PlotPoint] {
        &self.line
    }

    pub fn render(&mut self, ui: &mut Ui, surface: &mut PlotSurface) {
        self.sync_line(surface);

        let labels = surface.labels().clone();
        let autoscale = surface.view().autoscale;
        let ((x_min, x_max), (y_min, y_max)) = surface.view().padded();

        let plot = Plot::new("sampleplot_plot")
            .x_axis_label(labels.x.clone())
            .y_axis_label(labels.y.clone())
            .show_grid(true);

        let plot_resp = plot.show(ui, |plot_ui| {
            let resp = plot_ui.response();
            let is_zooming_rect = resp.drag_stopped_by(egui::PointerButton::Secondary);
            let is_panning =
                resp.dragged_by(egui::PointerButton::Primary) && resp.is_pointer_button_down_on();
            let scroll = resp.ctx.input(|i| i.raw_scroll_delta);
            let is_zooming_with_wheel = (scroll.x != 0.0 || scroll.y != 0.0) && resp.hovered();
            let refit = resp.double_clicked();
            let moved = is_zooming_rect || is_panning || is_zooming_with_wheel;

            if autoscale && !moved {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);
            }

            plot_ui.line(
                Line::new(labels.y.clone(), PlotPoints::Borrowed(&self.line))
                    .color(LINE_COLOR)
                    .width(1.5),
            );

            (moved, refit)
        });

        let (moved, refit) = plot_resp.inner;
        if refit {
            surface.reset_view();
        } else if moved {
            let b = plot_resp.transform.bounds();
            let (xr, yr) = (b.range_x(), b.range_y());
            let (x0, x1, y0, y1) = (*xr.start(), *xr.end(), *yr.start(), *yr.end());
            if x0.is_finite() && x1 > x0 && y0.is_finite() && y1 > y0 {
                surface.view_mut().set_manual((x0, x1), (y0, y1));
            }
        }
    }
}
