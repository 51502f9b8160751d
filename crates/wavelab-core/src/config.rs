// File: crates/wavelab-core/src/config.rs
// Summary: JSON configuration for the scenes; every field has a default so partial files load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlotResult;
use crate::modulation::{AmParams, AmScene, AM_SCALE};
use crate::theme::{self, Theme};
use crate::thermostat::Thermostat;
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmConfig {
    pub carrier_frequency: f64,
    /// Comma-separated angular frequencies, as typed into the control.
    pub modulator_frequencies: String,
    pub depth: f64,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Default for AmConfig {
    fn default() -> Self {
        Self {
            carrier_frequency: 10.0,
            modulator_frequencies: "1".to_owned(),
            depth: 0.5,
            width: WIDTH as u32,
            height: HEIGHT as u32,
            scale: AM_SCALE,
        }
    }
}

impl AmConfig {
    pub fn params(&self) -> PlotResult<AmParams> {
        Ok(AmParams {
            carrier_frequency: self.carrier_frequency,
            modulators: self.modulator_frequencies.parse()?,
            depth: self.depth,
        })
    }

    pub fn scene(&self, theme: Theme) -> PlotResult<AmScene> {
        Ok(AmScene::new(self.params()?).with_theme(theme).with_scale(self.scale))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { width: 160, height: 50 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermostatConfig {
    /// Slider position, 0..=100.
    pub slider: f64,
    pub article_width: f64,
    /// Schematic height over width, used when no image is supplied.
    pub image_aspect: f64,
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        Self { slider: 50.0, article_width: 800.0, image_aspect: 0.6 }
    }
}

impl ThermostatConfig {
    pub fn state(&self) -> Thermostat {
        Thermostat::from_slider(self.slider)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Theme preset name; unknown names fall back to the classic palette.
    pub theme: Option<String>,
    pub am: AmConfig,
    pub legend: LegendConfig,
    pub thermostat: ThermostatConfig,
}

impl LabConfig {
    pub fn from_json_str(s: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn theme(&self) -> Theme {
        self.theme.as_deref().map(theme::find).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = LabConfig::from_json_str(r#"{ "am": { "depth": 0.9 }, "thermostat": { "slider": 80 } }"#)
            .expect("valid json");
        assert_eq!(cfg.am.depth, 0.9);
        assert_eq!(cfg.am.carrier_frequency, 10.0);
        assert_eq!(cfg.am.width, WIDTH as u32);
        assert_eq!(cfg.thermostat.slider, 80.0);
        assert_eq!(cfg.legend, LegendConfig::default());
        assert_eq!(cfg.theme().name, "classic");
    }

    #[test]
    fn modulator_list_is_parsed_on_demand() {
        let mut cfg = AmConfig::default();
        cfg.modulator_frequencies = "1, 3".into();
        assert_eq!(cfg.params().expect("valid").modulators.0, vec![1.0, 3.0]);
        cfg.modulator_frequencies = "1, ?".into();
        assert!(cfg.params().is_err());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LabConfig::from_json_str("{ am: ").unwrap_err();
        assert!(matches!(err, crate::error::PlotError::Config(_)));
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        let cfg = LabConfig { theme: Some("High-Contrast".into()), ..LabConfig::default() };
        assert_eq!(cfg.theme().name, "high-contrast");
    }
}
