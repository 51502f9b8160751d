// File: crates/wavelab-core/src/axis.rs
// Summary: Axis mapping from mathematical coordinates to surface pixels.

use crate::error::{PlotError, PlotResult};

/// Origin offset, scale, and negative-axis flag for one render pass.
///
/// Contract: `scale` is finite and strictly positive. Use [`AxisConfig::new`]
/// to have that checked; the fields stay public so a pass can read them freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Pixels from the left edge to x = 0.
    pub origin_x_px: f64,
    /// Pixels from the top edge to y = 0.
    pub origin_y_px: f64,
    /// Pixels per mathematical unit, same on both axes.
    pub scale: f64,
    /// Sample to the left of the origin as well.
    pub include_negative_x: bool,
}

impl AxisConfig {
    pub fn new(origin_x_px: f64, origin_y_px: f64, scale: f64, include_negative_x: bool) -> PlotResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(PlotError::InvalidScale { scale });
        }
        Ok(Self { origin_x_px, origin_y_px, scale, include_negative_x })
    }

    /// Origin at the surface centre plus half a pixel on both axes; negative X included.
    pub fn centered(width: u32, height: u32, scale: f64) -> PlotResult<Self> {
        Self::new(0.5 + 0.5 * width as f64, 0.5 + 0.5 * height as f64, scale, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_scale() {
        assert!(matches!(AxisConfig::new(0.0, 0.0, 0.0, false), Err(PlotError::InvalidScale { .. })));
        assert!(AxisConfig::new(0.0, 0.0, -2.0, true).is_err());
        assert!(AxisConfig::new(0.0, 0.0, f64::NAN, true).is_err());
    }

    #[test]
    fn centered_uses_half_pixel_offset() {
        let axes = AxisConfig::centered(600, 300, 50.0).expect("valid");
        assert_eq!(axes.origin_x_px, 300.5);
        assert_eq!(axes.origin_y_px, 150.5);
        assert!(axes.include_negative_x);
    }
}
