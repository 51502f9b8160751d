// File: crates/wavelab-core/src/modulation.rs
// Summary: Amplitude-modulation model (carrier, modulating product, envelope) and its plot scene.

use std::str::FromStr;

use crate::axis::AxisConfig;
use crate::error::{PlotError, PlotResult};
use crate::plotter::plot;
use crate::surface::{DrawingSurface, Scene};
use crate::theme::Theme;
use crate::types::StrokeStyle;

/// Pixels per unit on both axes of the AM plot.
pub const AM_SCALE: f64 = 50.0;
/// Stroke width of both AM curves.
pub const CURVE_WIDTH: f32 = 2.0;

/// Angular frequencies of the modulating tones, multiplied together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModulatorList(pub Vec<f64>);

impl FromStr for ModulatorList {
    type Err = PlotError;

    /// Comma-separated list, e.g. `"1, 2.5"`. Blank entries are skipped.
    fn from_str(s: &str) -> PlotResult<Self> {
        let mut out = Vec::new();
        for raw in s.split(',') {
            let entry = raw.trim();
            if entry.is_empty() { continue; }
            let w = entry
                .parse::<f64>()
                .map_err(|_| PlotError::InvalidModulator { entry: entry.to_owned() })?;
            out.push(w);
        }
        Ok(Self(out))
    }
}

/// Inputs of one AM render: carrier ω, modulating ω list, modulation depth h.
#[derive(Clone, Debug, PartialEq)]
pub struct AmParams {
    pub carrier_frequency: f64,
    pub modulators: ModulatorList,
    pub depth: f64,
}

impl AmParams {
    pub fn new(carrier_frequency: f64, modulators: Vec<f64>, depth: f64) -> Self {
        Self { carrier_frequency, modulators: ModulatorList(modulators), depth }
    }

    /// Build from the raw text of the three controls.
    pub fn parse(carrier: &str, modulators: &str, depth: &str) -> PlotResult<Self> {
        let carrier_frequency = parse_number("carrier frequency", carrier)?;
        let depth = parse_number("modulation depth", depth)?;
        Ok(Self { carrier_frequency, modulators: modulators.parse()?, depth })
    }

    /// Π cos(ω_i·x); 1 when there are no modulators.
    pub fn modulating_signal(&self, x: f64) -> f64 {
        self.modulators.0.iter().fold(1.0, |acc, w| acc * (w * x).cos())
    }

    /// 1 + h·m(x)
    pub fn envelope(&self, x: f64) -> f64 {
        1.0 + self.depth * self.modulating_signal(x)
    }

    /// (1 + h·m(x))·sin(ω_p·x)
    pub fn modulated_wave(&self, x: f64) -> f64 {
        self.envelope(x) * (self.carrier_frequency * x).sin()
    }
}

impl Default for AmParams {
    fn default() -> Self {
        Self::new(10.0, vec![1.0], 0.5)
    }
}

fn parse_number(field: &'static str, s: &str) -> PlotResult<f64> {
    let t = s.trim();
    t.parse::<f64>().map_err(|_| PlotError::InvalidNumber { field, entry: t.to_owned() })
}

/// Carrier and envelope curves on a centred axis.
#[derive(Clone, Debug)]
pub struct AmScene {
    pub params: AmParams,
    pub theme: Theme,
    pub scale: f64,
}

impl AmScene {
    pub fn new(params: AmParams) -> Self {
        Self { params, theme: Theme::default(), scale: AM_SCALE }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn axes_for(&self, width: u32, height: u32) -> PlotResult<AxisConfig> {
        AxisConfig::centered(width, height, self.scale)
    }
}

impl Scene for AmScene {
    fn name(&self) -> &str { "am" }

    fn render(&self, surface: &mut dyn DrawingSurface) -> PlotResult<()> {
        let axes = self.axes_for(surface.width(), surface.height())?;
        surface.clear();
        let p = &self.params;
        plot(surface, &axes, |x| p.modulated_wave(x), &StrokeStyle::new(self.theme.carrier, CURVE_WIDTH));
        plot(surface, &axes, |x| p.envelope(x), &StrokeStyle::new(self.theme.modulator, CURVE_WIDTH));
        Ok(())
    }
}
