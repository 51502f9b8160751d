// File: crates/wavelab-core/src/lib.rs
// Summary: Core library entry point; exports the function plotter, drawing surface contract, and scenes.

pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod modulation;
pub mod plotter;
pub mod recording;
pub mod surface;
pub mod theme;
pub mod thermostat;
pub mod trigger;
pub mod types;

pub use axis::AxisConfig;
pub use config::LabConfig;
pub use error::{PlotError, PlotResult};
pub use legend::LegendScene;
pub use modulation::{AmParams, AmScene};
pub use plotter::{plot, sample, sample_range, Polyline};
pub use recording::RecordingSurface;
pub use surface::{render_on, DrawingSurface, Scene};
pub use theme::Theme;
pub use thermostat::{Thermostat, ThermostatLayout, ThermostatScene};
pub use trigger::{RenderTrigger, TriggerDispatcher};
pub use types::{Bitmap, Color, Fill, FontSpec, StrokeStyle};
