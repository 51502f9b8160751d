// File: crates/wavelab-core/src/types.rs
// Summary: Shared drawing types and constants (colors, strokes, fills, fonts, bitmaps).

/// Default surface width in pixels.
pub const WIDTH: i32 = 600;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// 8-bit RGBA color, straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color with a fractional alpha in `[0, 1]`, the way CSS `rgba()` spells it.
    pub fn rgba_f(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b, a }
    }

    /// `#rrggbb`, alpha ignored.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stroke descriptor for a path: color and line width in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// One color stop of a gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Fill paint for the current path.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Gradient between two concentric circles.
    RadialGradient {
        center: (f64, f64),
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<GradientStop>,
    },
}

/// Font request for `fill_text`. Family is always the renderer's sans-serif stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size_px: f32,
}

impl FontSpec {
    pub const fn new(size_px: f32) -> Self {
        Self { size_px }
    }
}

/// Straight-alpha RGBA8 image, row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Wrap an RGBA8 buffer. Returns `None` when the buffer length does not match.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected { return None; }
        Some(Self { width, height, pixels })
    }

    /// A uniformly filled bitmap.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self { width, height, pixels }
    }

    /// Height over width; 0 for an empty bitmap.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 { return 0.0; }
        self.height as f64 / self.width as f64
    }
}
