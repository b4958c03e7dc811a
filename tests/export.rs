use chrono::NaiveDate;
use sampleplot::export::tabular::{file_name, write_csv};
use sampleplot::export::vector::{self, render_svg, VectorStyle};
use sampleplot::*;

fn snapshot(points: &[(f64, f64)]) -> Snapshot {
    points
        .iter()
        .map(|&(x, y)| SampleStep::new(x, y))
        .collect::<Vec<_>>()
        .into()
}

fn csv_string(s: &Snapshot) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, s).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn empty_snapshot_writes_header_only() {
    let text = csv_string(&Snapshot::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["x,y"]);
}

#[test]
fn rows_round_trip_at_full_precision() {
    let values = [
        (0.0, exercise(0.0)),
        (0.1 + 0.2, 1.0 / 3.0),
        (1e-300, -2.5e17),
        (0.01, exercise(0.01)),
    ];
    let text = csv_string(&snapshot(&values));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), values.len() + 1);
    assert_eq!(lines[0], "x,y");
    for (line, (x, y)) in lines[1..].iter().zip(values.iter()) {
        let mut fields = line.split(',');
        let px: f64 = fields.next().unwrap().parse().unwrap();
        let py: f64 = fields.next().unwrap().parse().unwrap();
        assert!(fields.next().is_none());
        assert_eq!(px.to_bits(), x.to_bits());
        assert_eq!(py.to_bits(), y.to_bits());
    }
}

#[test]
fn csv_file_name_uses_label_and_timestamp() {
    let now = NaiveDate::from_ymd_opt(2023, 12, 1)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    assert_eq!(file_name("Experiment", now), "Experiment_2023-12-01_23-59-00.csv");
    assert_eq!(vector::file_name(now), "plot_2023-12-01_23-59-00");
}

#[test]
fn svg_contains_axis_labels() {
    let s = snapshot(&[(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)]);
    let svg = render_svg(&s, &AxisLabels::new("time", "signal"), &VectorStyle::default()).unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
    assert!(svg.contains("time"));
    assert!(svg.contains("signal"));
    assert!(svg.contains("polyline") || svg.contains("path"));
}

#[test]
fn svg_renders_empty_and_single_point_snapshots() {
    let labels = AxisLabels::default();
    let style = VectorStyle {
        show_grid: false,
        ..VectorStyle::default()
    };
    assert!(render_svg(&Snapshot::default(), &labels, &style).is_ok());
    assert!(render_svg(&snapshot(&[(3.0, 3.0)]), &labels, &style).is_ok());
}
