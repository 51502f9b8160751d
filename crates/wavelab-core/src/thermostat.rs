// File: crates/wavelab-core/src/thermostat.rs
// Summary: Thermostat circuit model (thermistor divider + comparator) and its annotated schematic scene.
// Notes:
// - The thermistor line fit and the comparator levels are fixed constants of the
//   demonstration circuit; nothing beyond the schematic labels is derived from them.

use crate::error::PlotResult;
use crate::geometry::{clamp, round_half_up};
use crate::surface::{DrawingSurface, Scene};
use crate::theme::Theme;
use crate::types::{Bitmap, Color, Fill, FontSpec, GradientStop};

/// Thermistor resistance at 0 °C of the linear fit, kΩ.
pub const THERMISTOR_INTERCEPT_KOHM: f64 = 19.7;
/// Thermistor resistance drop per °C of the linear fit, kΩ.
pub const THERMISTOR_SLOPE_KOHM_PER_C: f64 = 0.388;
/// Fixed resistor of the divider, kΩ.
pub const SERIES_RESISTOR_KOHM: f64 = 10.0;
pub const SUPPLY_VOLTS: f64 = 5.0;
/// Comparator reference printed on the schematic.
pub const REFERENCE_VOLTS_LABEL: &str = "2.23V";
/// At or above this temperature the comparator output drops and the lamp lights.
pub const TRIP_TEMPERATURE_C: f64 = 30.0;
pub const SLIDER_MAX: f64 = 100.0;
/// Temperature at full slider travel.
pub const TEMPERATURE_SPAN_C: f64 = 50.0;

/// Width of the schematic relative to the article column.
const IMAGE_WIDTH_FRAC: f64 = 0.9;
const FONT_CU: f64 = 3.5;

/// Circuit state for one slider position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thermostat {
    slider: f64,
}

impl Thermostat {
    /// Slider position in `[0, 100]`; values outside are clamped.
    pub fn from_slider(position: f64) -> Self {
        let slider = if position.is_nan() { 0.0 } else { clamp(position, 0.0, SLIDER_MAX) };
        Self { slider }
    }

    pub fn slider(&self) -> f64 { self.slider }

    pub fn temperature_c(&self) -> f64 {
        self.slider * TEMPERATURE_SPAN_C / SLIDER_MAX
    }

    pub fn thermistor_kohm(&self) -> f64 {
        THERMISTOR_INTERCEPT_KOHM - THERMISTOR_SLOPE_KOHM_PER_C * self.temperature_c()
    }

    /// Voltage across the thermistor in the divider.
    pub fn divider_volts(&self) -> f64 {
        let r = self.thermistor_kohm();
        SUPPLY_VOLTS * r / (r + SERIES_RESISTOR_KOHM)
    }

    pub fn is_tripped(&self) -> bool {
        self.temperature_c() >= TRIP_TEMPERATURE_C
    }

    pub fn comparator_volts(&self) -> f64 {
        if self.is_tripped() { 0.0 } else { SUPPLY_VOLTS }
    }

    pub fn comparator_label(&self) -> &'static str {
        if self.is_tripped() { "0V" } else { "5V" }
    }

    /// Red-to-blue readout color: `#RR11BB`, red growing with the slider.
    pub fn readout_color(&self) -> Color {
        let r = round_half_up(self.slider * 255.0 / SLIDER_MAX) as u8;
        Color::rgb(r, 0x11, 255 - r)
    }

    /// e.g. `"15.0 °C"`
    pub fn readout_text(&self) -> String {
        format!("{:.1} °C", self.temperature_c())
    }
}

/// Canvas geometry derived from the article column width and schematic aspect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermostatLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub image_x: f64,
    pub image_width: f64,
    pub image_height: f64,
    /// One hundredth of the schematic's drawn width.
    pub cu: f64,
}

impl ThermostatLayout {
    pub fn for_article(article_width: f64, image_aspect: f64) -> Self {
        let image_width = IMAGE_WIDTH_FRAC * article_width;
        let image_height = image_width * image_aspect;
        Self {
            canvas_width: article_width,
            canvas_height: image_height,
            image_x: (article_width - image_width) / 2.0,
            image_width,
            image_height,
            cu: image_width / 100.0,
        }
    }

    /// Point `(ux, uy)` in canvas units, X measured from the schematic's left edge.
    pub fn at(&self, ux: f64, uy: f64) -> (f64, f64) {
        (self.image_x + ux * self.cu, uy * self.cu)
    }

    /// Surface size in whole pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.canvas_width.max(0.0) as u32, self.canvas_height.max(0.0) as u32)
    }
}

/// Schematic, lamp, and live values for one thermostat state.
#[derive(Clone, Debug)]
pub struct ThermostatScene {
    pub state: Thermostat,
    pub schematic: Bitmap,
    pub theme: Theme,
}

impl ThermostatScene {
    pub fn new(state: Thermostat, schematic: Bitmap) -> Self {
        Self { state, schematic, theme: Theme::default() }
    }

    /// Layout for a surface that spans the article column.
    pub fn layout_for(&self, article_width: f64) -> ThermostatLayout {
        ThermostatLayout::for_article(article_width, self.schematic.aspect_ratio())
    }

    fn draw_lamp(&self, surface: &mut dyn DrawingSurface, layout: &ThermostatLayout) {
        if !self.state.is_tripped() { return; }
        let (x, y) = layout.at(76.0, 15.0);
        let r = 4.0 * layout.cu;
        surface.begin_path();
        surface.circle(x, y, r);
        surface.fill(&Fill::RadialGradient {
            center: (x, y),
            inner_radius: r / 2.0,
            outer_radius: r,
            stops: vec![
                GradientStop { offset: 0.0, color: self.theme.lamp_core },
                GradientStop { offset: 1.0, color: self.theme.lamp_rim },
            ],
        });
    }
}

impl Scene for ThermostatScene {
    fn name(&self) -> &str { "thermostat" }

    fn render(&self, surface: &mut dyn DrawingSurface) -> PlotResult<()> {
        let layout = self.layout_for(surface.width() as f64);
        let color = self.theme.annotation;
        let font = FontSpec::new((FONT_CU * layout.cu) as f32);

        surface.clear();
        surface.draw_image(&self.schematic, layout.image_x, 0.0, layout.image_width, layout.image_height);
        self.draw_lamp(surface, &layout);

        let s = &self.state;
        let (x, y) = layout.at(41.0, 61.0);
        surface.fill_text(&format!("{:.2}k", s.thermistor_kohm()), x, y, &font, color);
        let (x, y) = layout.at(45.0, 43.0);
        surface.fill_text(&format!("{:.2}V", s.divider_volts()), x, y, &font, color);
        let (x, y) = layout.at(13.0, 33.0);
        surface.fill_text(REFERENCE_VOLTS_LABEL, x, y, &font, color);
        let (x, y) = layout.at(77.0, 37.0);
        surface.fill_text(s.comparator_label(), x, y, &font, color);
        Ok(())
    }
}
