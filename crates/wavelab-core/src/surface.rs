// File: crates/wavelab-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface contract and scene entry points.

use tracing::debug;

use crate::error::PlotResult;
use crate::types::{Bitmap, Color, Fill, FontSpec, StrokeStyle};

/// Pixel-addressable 2D canvas with a single current path.
///
/// Coordinates are in pixels, origin top-left, Y growing downward. Non-finite
/// coordinates are accepted; what gets drawn for them is up to the backend.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reset a rectangle to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Discard the current path and start an empty one.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Append a full circle as a closed sub-path.
    fn circle(&mut self, cx: f64, cy: f64, radius: f64);

    fn stroke(&mut self, style: &StrokeStyle);
    fn fill(&mut self, fill: &Fill);

    /// Draw `bitmap` scaled into the destination rectangle.
    fn draw_image(&mut self, bitmap: &Bitmap, x: f64, y: f64, w: f64, h: f64);
    /// Draw `text` with its alphabetic baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &FontSpec, color: Color);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (w, h) = (self.width() as f64, self.height() as f64);
        self.clear_rect(0.0, 0.0, w, h);
    }
}

/// Something that draws itself completely onto a surface in one pass.
pub trait Scene {
    fn name(&self) -> &str;
    fn render(&self, surface: &mut dyn DrawingSurface) -> PlotResult<()>;
}

/// Render `scene` if a surface could be acquired.
///
/// A missing surface is not an error: the render is skipped and `Ok(false)`
/// is returned.
pub fn render_on<S: DrawingSurface>(scene: &dyn Scene, surface: Option<&mut S>) -> PlotResult<bool> {
    match surface {
        Some(s) => {
            scene.render(s)?;
            Ok(true)
        }
        None => {
            debug!(scene = scene.name(), "no drawing surface available; render skipped");
            Ok(false)
        }
    }
}
