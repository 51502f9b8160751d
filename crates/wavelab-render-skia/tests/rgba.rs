// File: crates/wavelab-render-skia/tests/rgba.rs
// Purpose: Validate RGBA readback, curve pixels, and gaps left by undefined samples.

use wavelab_core::{plot, AmParams, AmScene, AxisConfig, Color, DrawingSurface, Scene, StrokeStyle};
use wavelab_render_skia::SkiaSurface;

fn pixel(px: &[u8], width: u32, x: usize, y: usize) -> [u8; 4] {
    let i = (y * width as usize + x) * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn rgba_buffer_shape_and_transparent_background() {
    let mut surface = SkiaSurface::new(120, 80).expect("surface");
    AmScene::new(AmParams::default()).render(&mut surface).expect("render");
    let px = surface.to_rgba8().expect("rgba");
    assert_eq!(px.len(), 120 * 80 * 4);
    assert_eq!(pixel(&px, 120, 0, 79)[3], 0, "corner far from both curves stays clear");
}

#[test]
fn flat_envelope_lands_on_expected_row() {
    // no modulators, depth 0: envelope is y = 1, i.e. 50 px above a 75.5 px origin
    let scene = AmScene::new(AmParams::new(10.0, vec![], 0.0));
    let mut surface = SkiaSurface::new(200, 150).expect("surface");
    scene.render(&mut surface).expect("render");
    let px = surface.to_rgba8().expect("rgba");

    let p = pixel(&px, 200, 10, 25);
    assert_eq!(p[3], 255);
    assert!((p[0] as i32 - 66).abs() <= 3 && (p[1] as i32 - 44).abs() <= 3 && p[2] >= 252, "got {p:?}");
    assert_eq!(pixel(&px, 200, 10, 20)[3], 0);
}

#[test]
fn nan_samples_leave_a_gap() {
    let mut surface = SkiaSurface::new(200, 150).expect("surface");
    let axes = AxisConfig::centered(200, 150, 50.0).expect("axes");
    let f = |x: f64| if x.abs() < 0.5 { f64::NAN } else { 1.0 };
    surface.clear();
    plot(&mut surface, &axes, f, &StrokeStyle::new(Color::rgb(0, 0, 0), 2.0));
    let px = surface.to_rgba8().expect("rgba");

    assert_eq!(pixel(&px, 200, 20, 25)[3], 255, "left run drawn");
    assert_eq!(pixel(&px, 200, 180, 25)[3], 255, "right run drawn");
    assert_eq!(pixel(&px, 200, 100, 25)[3], 0, "gap where f is undefined");
}
