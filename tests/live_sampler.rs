use chrono::{NaiveDate, NaiveDateTime};
use sampleplot::export::ExportSettings;
use sampleplot::*;
use std::path::Path;

fn sampler(resolution: f64, dir: &Path) -> LiveSampler {
    let export = ExportSettings {
        output_dir: dir.to_path_buf(),
        ..ExportSettings::default()
    };
    LiveSampler::new(resolution, Box::new(exercise), AxisLabels::default(), export).unwrap()
}

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_opt(14, 3, 9)
        .unwrap()
}

#[test]
fn inputs_are_exact_multiples_of_resolution() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.1, tmp.path());
    for _ in 0..50 {
        s.tick();
    }
    let inputs = s.surface().series().inputs();
    assert_eq!(inputs.len(), 50);
    for (i, x) in inputs.iter().enumerate() {
        assert_eq!(*x, i as f64 * 0.1);
    }
}

#[test]
fn tick_reports_the_appended_step() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.5, tmp.path());
    assert_eq!(s.surface().series().last(), None);
    s.tick();
    let TickOutcome::Sampled(step) = s.tick() else {
        panic!("running sampler must sample");
    };
    assert_eq!(step, SampleStep::new(0.5, exercise(0.5)));
    assert_eq!(s.surface().series().last(), Some(step));
}

#[test]
fn zero_ticks_leave_buffer_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let s = sampler(0.01, tmp.path());
    assert!(s.surface().series().is_empty());
    assert_eq!(s.surface().state(), RunState::Running);
    assert_eq!(s.next_input(), 0.0);
}

#[test]
fn pause_resume_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    for _ in 0..3 {
        assert!(matches!(s.tick(), TickOutcome::Sampled(_)));
    }
    let series = s.surface().series();
    assert_eq!(series.inputs(), &[0.0, 0.01, 0.02]);
    assert_eq!(
        series.outputs(),
        &[exercise(0.0), exercise(0.01), exercise(0.02)]
    );

    assert_eq!(s.handle(Command::TogglePause).unwrap(), CommandOutcome::Paused);
    assert_eq!(s.tick(), TickOutcome::Idle);
    assert_eq!(s.tick(), TickOutcome::Idle);
    assert_eq!(s.surface().series().len(), 3);

    assert_eq!(s.handle(Command::TogglePause).unwrap(), CommandOutcome::Resumed);
    assert!((s.next_input() - 0.03).abs() < 1e-12);
    match s.tick() {
        TickOutcome::Sampled(step) => assert!((step.x - 0.03).abs() < 1e-12),
        other => panic!("expected a sample, got {:?}", other),
    }
    assert_eq!(s.surface().series().len(), 4);
}

#[test]
fn paused_ticks_request_short_yield() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    s.toggle_pause();
    s.surface_mut().take_redraw_request();
    s.tick();
    assert_eq!(
        s.surface_mut().take_redraw_request(),
        Some(sampleplot::live_sampler::PAUSED_YIELD)
    );
    assert!(!s.surface_mut().take_line_dirty());
}

#[test]
fn reset_empties_buffer_while_running_and_paused() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.5, tmp.path());
    s.tick();
    s.tick();
    assert_eq!(s.handle(Command::Reset).unwrap(), CommandOutcome::Cleared);
    assert!(s.surface().series().is_empty());

    s.tick();
    s.toggle_pause();
    s.reset();
    assert!(s.surface().series().is_empty());
    assert_eq!(s.surface().state(), RunState::Paused);
}

#[test]
fn reset_keeps_time_cursor() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.5, tmp.path());
    s.tick();
    s.tick();
    s.reset();
    match s.tick() {
        TickOutcome::Sampled(step) => assert_eq!(step.x, 1.0),
        other => panic!("expected a sample, got {:?}", other),
    }
    assert_eq!(s.surface().series().inputs(), &[1.0]);
}

#[test]
fn resume_re_engages_autoscale() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.25, tmp.path());
    s.tick();
    s.tick();
    s.surface_mut().view_mut().set_manual((5.0, 6.0), (5.0, 6.0));
    s.toggle_pause();
    assert!(!s.surface().view().autoscale);
    s.toggle_pause();
    assert!(s.surface().view().autoscale);
    s.tick();
    assert_eq!(s.surface().view().x_bounds, (0.0, 0.5));
}

#[test]
fn closed_sampler_stops_and_ignores_pause() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    s.tick();
    s.on_close();
    s.on_close();
    assert!(!s.is_open());
    assert_eq!(s.tick(), TickOutcome::Stopped);
    assert_eq!(s.handle(Command::TogglePause).unwrap(), CommandOutcome::Ignored);
    assert_eq!(s.surface().state(), RunState::Stopped);
    assert_eq!(s.surface().series().len(), 1);
}

#[test]
fn export_tabular_writes_header_and_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    for _ in 0..5 {
        s.tick();
    }
    let outcome = s.handle_at(Command::ExportTabular, fixed_now()).unwrap();
    let expected = tmp.path().join("Experiment_2024-05-17_14-03-09.csv");
    assert_eq!(outcome, CommandOutcome::Exported(expected.clone()));

    let text = std::fs::read_to_string(&expected).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "x,y");
    for (line, step) in lines[1..].iter().zip(s.surface().series().iter()) {
        let (x, y) = line.split_once(',').unwrap();
        assert_eq!(x.parse::<f64>().unwrap(), step.x);
        assert_eq!(y.parse::<f64>().unwrap(), step.y);
    }
}

#[test]
fn rename_changes_csv_file_name_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    s.tick();
    let outcome = s.handle(Command::Rename("run 7".to_string())).unwrap();
    assert_eq!(outcome, CommandOutcome::Renamed("run 7".to_string()));
    assert_eq!(s.experiment_label(), "run 7");

    s.handle_at(Command::ExportTabular, fixed_now()).unwrap();
    assert!(tmp.path().join("run 7_2024-05-17_14-03-09.csv").is_file());
}

#[test]
fn export_does_not_consume_or_alter_buffer() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    s.tick();
    s.tick();
    let before = s.surface().series().clone();
    s.handle_at(Command::ExportTabular, fixed_now()).unwrap();
    s.handle_at(Command::ExportVector, fixed_now()).unwrap();
    assert_eq!(s.surface().series(), &before);
    assert_eq!(s.surface().state(), RunState::Running);
}

#[test]
fn export_vector_writes_svg_without_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = sampler(0.01, tmp.path());
    for _ in 0..20 {
        s.tick();
    }
    let outcome = s.handle_at(Command::ExportVector, fixed_now()).unwrap();
    let expected = tmp.path().join("plot_2024-05-17_14-03-09");
    assert_eq!(outcome, CommandOutcome::Exported(expected.clone()));
    let svg = std::fs::read_to_string(expected).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("h(t)"));
}

#[test]
fn missing_output_dir_is_an_error_and_sampling_continues() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("does-not-exist");
    let mut s = sampler(0.01, &missing);
    s.tick();
    let err = s.handle_at(Command::ExportTabular, fixed_now()).unwrap_err();
    assert!(matches!(err, SamplePlotError::MissingOutputDir { .. }));
    assert!(!missing.exists());

    assert!(matches!(s.tick(), TickOutcome::Sampled(_)));
    assert_eq!(s.surface().series().len(), 2);
}

#[test]
fn output_dir_is_created_when_allowed() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("output");
    let export = ExportSettings {
        output_dir: dir.clone(),
        create_output_dir: true,
        ..ExportSettings::default()
    };
    let mut s =
        LiveSampler::new(0.01, Box::new(exercise), AxisLabels::default(), export).unwrap();
    s.tick();
    s.handle_at(Command::ExportTabular, fixed_now()).unwrap();
    assert!(dir.join("Experiment_2024-05-17_14-03-09.csv").is_file());
}

#[test]
fn invalid_resolution_is_rejected() {
    for r in [0.0, -0.01, f64::NAN, f64::INFINITY] {
        let res = LiveSampler::new(r, Box::new(exercise), AxisLabels::default(), Default::default());
        assert!(matches!(res, Err(SamplePlotError::InvalidResolution(_))));
    }
}
