// File: crates/wavelab-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of `DrawingSurface` with PNG and RGBA8 export.

pub mod text;

use skia_safe as skia;
use tracing::warn;

use wavelab_core::{Bitmap, Color, DrawingSurface, Fill, FontSpec, PlotError, PlotResult, StrokeStyle};

pub use text::TextShaper;

#[inline]
fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn finite(x: f64, y: f64) -> bool {
    x.is_finite() && y.is_finite()
}

/// Raster surface holding one current path, canvas-style.
///
/// A non-finite point is dropped from the path and the next finite point
/// starts a new sub-path, so an undefined sample shows up as a gap.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: u32,
    height: u32,
    path: skia::Path,
    pen_lifted: bool,
    text: TextShaper,
}

impl SkiaSurface {
    /// Allocate a transparent raster surface. `None` when the size is unusable.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 { return None; }
        let w = i32::try_from(width).ok()?;
        let h = i32::try_from(height).ok()?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        Some(Self {
            surface,
            width,
            height,
            path: skia::Path::new(),
            pen_lifted: true,
            text: TextShaper::new(),
        })
    }

    pub fn try_new(width: u32, height: u32) -> PlotResult<Self> {
        Self::new(width, height).ok_or(PlotError::InvalidSurfaceSize {
            width: width.min(i32::MAX as u32) as i32,
            height: height.min(i32::MAX as u32) as i32,
        })
    }

    /// Straight-alpha RGBA8 copy of the pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> PlotResult<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut buf = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut buf, row_bytes, (0, 0)) {
            return Err(PlotError::Backend("pixel readback failed".into()));
        }
        Ok(buf)
    }

    pub fn to_png_bytes(&mut self) -> PlotResult<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Backend("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> PlotResult<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn make_image(bitmap: &Bitmap) -> Option<skia::Image> {
        let info = skia::ImageInfo::new(
            (i32::try_from(bitmap.width).ok()?, i32::try_from(bitmap.height).ok()?),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let data = skia::Data::new_copy(&bitmap.pixels);
        skia::images::raster_from_data(&info, data, bitmap.width as usize * 4)
    }
}

impl DrawingSurface for SkiaSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        let rect = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
        self.pen_lifted = true;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if !finite(x, y) {
            self.pen_lifted = true;
            return;
        }
        self.path.move_to((x as f32, y as f32));
        self.pen_lifted = false;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !finite(x, y) {
            self.pen_lifted = true;
            return;
        }
        if self.pen_lifted {
            self.path.move_to((x as f32, y as f32));
            self.pen_lifted = false;
        } else {
            self.path.line_to((x as f32, y as f32));
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        if !finite(cx, cy) || !radius.is_finite() { return; }
        self.path.add_circle((cx as f32, cy as f32), radius as f32, None);
        self.pen_lifted = true;
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        paint.set_color(sk_color(style.color));
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn fill(&mut self, fill: &Fill) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        match fill {
            Fill::Solid(c) => {
                paint.set_color(sk_color(*c));
            }
            Fill::RadialGradient { center, inner_radius, outer_radius, stops } => {
                let colors: Vec<skia::Color> = stops.iter().map(|s| sk_color(s.color)).collect();
                let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
                let c = (center.0 as f32, center.1 as f32);
                let shader = skia::Shader::two_point_conical_gradient(
                    c,
                    *inner_radius as f32,
                    c,
                    *outer_radius as f32,
                    colors.as_slice(),
                    Some(offsets.as_slice()),
                    skia::TileMode::Clamp,
                    None,
                    None,
                );
                match shader {
                    Some(s) => { paint.set_shader(s); }
                    None => {
                        warn!(stops = stops.len(), "radial gradient rejected by skia; fill skipped");
                        return;
                    }
                }
            }
        }
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn draw_image(&mut self, bitmap: &Bitmap, x: f64, y: f64, w: f64, h: f64) {
        let Some(image) = Self::make_image(bitmap) else {
            warn!(width = bitmap.width, height = bitmap.height, "bitmap could not be wrapped; image skipped");
            return;
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        let dst = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32);
        self.surface.canvas().draw_image_rect(&image, None, dst, &paint);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &FontSpec, color: Color) {
        let canvas = self.surface.canvas();
        self.text.draw_baseline(canvas, text, x as f32, y as f32, font.size_px, sk_color(color));
    }
}
