// File: crates/wavelab-core/src/plotter.rs
// Summary: Function plotter; samples f(x) once per pixel column and strokes the result as one polyline.

use tracing::trace;

use crate::axis::AxisConfig;
use crate::geometry::round_half_up;
use crate::surface::DrawingSurface;
use crate::types::StrokeStyle;

/// Horizontal distance between consecutive samples, in pixels.
pub const SAMPLE_STEP_PX: f64 = 1.0;

/// Ordered pixel coordinates visited by one plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    /// First sample index (`i_min`); `points[k]` belongs to index `first_index + k`.
    pub first_index: i64,
    pub points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Point for sample index `i`, if it was sampled.
    pub fn at_index(&self, i: i64) -> Option<(f64, f64)> {
        let k = i.checked_sub(self.first_index)?;
        if k < 0 { return None; }
        self.points.get(k as usize).copied()
    }

    /// Maximal runs of finite points. A non-finite sample splits the line.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.points
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}

/// Inclusive sample index range `(i_min, i_max)` for a surface of `surface_width` pixels.
pub fn sample_range(surface_width: u32, axes: &AxisConfig) -> (i64, i64) {
    let i_max = round_half_up((surface_width as f64 - axes.origin_x_px) / SAMPLE_STEP_PX) as i64;
    let i_min = if axes.include_negative_x {
        round_half_up(-axes.origin_x_px / SAMPLE_STEP_PX) as i64
    } else {
        0
    };
    (i_min, i_max)
}

#[inline]
fn sample_point<F: Fn(f64) -> f64>(i: i64, axes: &AxisConfig, f: &F) -> (f64, f64) {
    let xx = SAMPLE_STEP_PX * i as f64;
    let yy = axes.scale * f(xx / axes.scale);
    (axes.origin_x_px + xx, axes.origin_y_px - yy)
}

/// Evaluate `f` over the sample range without drawing.
pub fn sample<F: Fn(f64) -> f64>(surface_width: u32, axes: &AxisConfig, f: F) -> Polyline {
    let (i_min, i_max) = sample_range(surface_width, axes);
    let points = (i_min..=i_max).map(|i| sample_point(i, axes, &f)).collect();
    Polyline { first_index: i_min, points }
}

/// Plot `f` onto `surface` as a single stroked path.
///
/// Non-finite values of `f` are passed through to the surface; sampling never
/// stops early. Returns the number of samples emitted.
pub fn plot<S, F>(surface: &mut S, axes: &AxisConfig, f: F, stroke: &StrokeStyle) -> usize
where
    S: DrawingSurface + ?Sized,
    F: Fn(f64) -> f64,
{
    let (i_min, i_max) = sample_range(surface.width(), axes);
    trace!(i_min, i_max, scale = axes.scale, "plot");

    surface.begin_path();
    let mut emitted = 0usize;
    for i in i_min..=i_max {
        let (px, py) = sample_point(i, axes, &f);
        if i == i_min {
            surface.move_to(px, py);
        } else {
            surface.line_to(px, py);
        }
        emitted += 1;
    }
    surface.stroke(stroke);
    emitted
}
