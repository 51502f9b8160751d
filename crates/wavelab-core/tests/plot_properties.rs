// File: crates/wavelab-core/tests/plot_properties.rs
// Purpose: Function plotter sampling, transform, path shape, and non-finite pass-through.

use proptest::prelude::*;
use wavelab_core::recording::DrawCommand;
use wavelab_core::{plot, sample, sample_range, AxisConfig, Color, DrawingSurface, RecordingSurface, StrokeStyle};

fn stroke() -> StrokeStyle {
    StrokeStyle::new(Color::rgb(11, 153, 11), 2.0)
}

fn plotted_points(width: u32, axes: &AxisConfig, f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
    let mut s = RecordingSurface::new(width, 100);
    plot(&mut s, axes, f, &stroke());
    let paths = s.stroked_paths();
    assert_eq!(paths.len(), 1, "exactly one stroke per plot");
    paths.into_iter().next().map(|p| p.points).unwrap_or_default()
}

#[test]
fn identity_on_100px_surface() {
    let axes = AxisConfig::new(50.0, 50.0, 50.0, true).expect("valid axes");
    let line = sample(100, &axes, |x| x);

    assert_eq!(sample_range(100, &axes), (-50, 50));
    assert_eq!(line.points.first().copied(), Some((0.0, 100.0)));
    assert_eq!(line.at_index(0), Some((50.0, 50.0)));
    assert_eq!(line.points.last().copied(), Some((100.0, 0.0)));
    assert_eq!(line.len(), 101);
}

#[test]
fn centred_origin_samples_every_column_boundary() {
    for width in [1u32, 2, 99, 100, 101, 600] {
        let axes = AxisConfig::centered(width, 50, 50.0).expect("valid axes");
        let (i_min, i_max) = sample_range(width, &axes);
        let line = sample(width, &axes, f64::sin);
        assert_eq!(line.len() as i64, i_max - i_min + 1);
        assert_eq!(line.len(), width as usize + 1, "width {width}");
    }
}

#[test]
fn origin_past_right_edge_plots_nothing() {
    let axes = AxisConfig::new(250.0, 0.0, 10.0, false).expect("valid axes");
    let mut s = RecordingSurface::new(100, 100);
    assert_eq!(plot(&mut s, &axes, |x| x, &stroke()), 0);
    assert_eq!(s.count(|c| matches!(c, DrawCommand::MoveTo { .. } | DrawCommand::LineTo { .. })), 0);
}

#[test]
fn plot_and_sample_agree() {
    let axes = AxisConfig::new(30.5, 40.0, 25.0, true).expect("valid axes");
    let f = |x: f64| (3.0 * x).sin() * x.cos();
    assert_eq!(plotted_points(120, &axes, f), sample(120, &axes, f).points);
}

#[test]
fn replot_on_cleared_surface_is_identical() {
    let axes = AxisConfig::centered(200, 100, 50.0).expect("valid axes");
    let f = |x: f64| (1.0 + 0.5 * x.cos()) * (10.0 * x).sin();

    let mut s = RecordingSurface::new(200, 100);
    s.clear();
    plot(&mut s, &axes, f, &stroke());
    let first = s.commands.clone();

    s.reset();
    s.clear();
    plot(&mut s, &axes, f, &stroke());
    assert_eq!(s.commands, first);
}

#[test]
fn nan_sample_leaves_gap_without_aborting() {
    let axes = AxisConfig::new(50.0, 50.0, 10.0, true).expect("valid axes");
    let f = |x: f64| if x == 0.0 { f64::NAN } else { 1.0 / x.abs().max(1.0) };

    let points = plotted_points(100, &axes, f);
    assert_eq!(points.len(), 101);
    assert!(points[50].1.is_nan());
    assert!(points.iter().enumerate().all(|(k, p)| k == 50 || p.1.is_finite()));

    let line = sample(100, &axes, f);
    let segs = line.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].len() + segs[1].len(), 100);
}

#[test]
fn division_by_zero_passes_infinity_through() {
    let axes = AxisConfig::new(0.0, 50.0, 10.0, false).expect("valid axes");
    let line = sample(20, &axes, |x| 1.0 / x);
    assert!(line.points[0].1.is_infinite());
    assert!(line.points[1..].iter().all(|p| p.1.is_finite()));
}

proptest! {
    #[test]
    fn constant_function_is_a_flat_line(
        width in 1u32..400,
        ox in -100.0f64..500.0,
        oy in -100.0f64..500.0,
        scale in 0.1f64..200.0,
        c in -10.0f64..10.0,
        neg in any::<bool>(),
    ) {
        let axes = AxisConfig::new(ox, oy, scale, neg).expect("valid axes");
        let line = sample(width, &axes, |_| c);
        let want = oy - scale * c;
        for (_, y) in &line.points {
            prop_assert!((y - want).abs() <= 1e-9 * (1.0 + want.abs()));
        }
    }

    #[test]
    fn sine_stays_within_one_scale_of_origin(
        width in 1u32..600,
        ox in 0.0f64..600.0,
        oy in 0.0f64..400.0,
        scale in 0.5f64..150.0,
        neg in any::<bool>(),
    ) {
        let axes = AxisConfig::new(ox, oy, scale, neg).expect("valid axes");
        let points = plotted_points(width, &axes, f64::sin);
        for (_, y) in &points {
            prop_assert!(*y >= oy - scale - 1e-9 && *y <= oy + scale + 1e-9);
        }
    }

    #[test]
    fn x_advances_one_pixel_per_sample(
        width in 1u32..300,
        ox in 0.0f64..300.0,
        neg in any::<bool>(),
    ) {
        let axes = AxisConfig::new(ox, 0.0, 20.0, neg).expect("valid axes");
        let (i_min, i_max) = sample_range(width, &axes);
        let line = sample(width, &axes, |x| x * x);
        prop_assert_eq!(line.len() as i64, (i_max - i_min + 1).max(0));
        if !neg { prop_assert_eq!(i_min, 0); }
        for pair in line.points.windows(2) {
            prop_assert!((pair[1].0 - pair[0].0 - 1.0).abs() < 1e-9);
        }
    }
}
