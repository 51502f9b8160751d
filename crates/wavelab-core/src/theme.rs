// File: crates/wavelab-core/src/theme.rs
// Summary: Color palette shared by the scenes.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Modulated carrier curve.
    pub carrier: Color,
    /// Envelope / modulating curve.
    pub modulator: Color,
    /// Legend label text.
    pub legend_text: Color,
    /// Thermostat value annotations.
    pub annotation: Color,
    /// Lamp gradient, centre then rim.
    pub lamp_core: Color,
    pub lamp_rim: Color,
    /// Placeholder schematic panel when no circuit image is supplied.
    pub schematic_panel: Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            carrier: Color::rgb(11, 153, 11),
            modulator: Color::rgb(66, 44, 255),
            legend_text: Color::rgb(0, 0, 0),
            annotation: Color::rgb(180, 0, 0),
            lamp_core: Color::rgba_f(200, 0, 0, 0.8),
            lamp_rim: Color::rgba_f(200, 200, 200, 0.8),
            schematic_panel: Color::rgb(245, 245, 240),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            carrier: Color::rgb(0x00, 0xaa, 0x00),
            modulator: Color::rgb(0x00, 0x00, 0xff),
            legend_text: Color::rgb(0x00, 0x00, 0x00),
            annotation: Color::rgb(0xcc, 0x00, 0x00),
            lamp_core: Color::rgb(0xff, 0x00, 0x00),
            lamp_rim: Color::rgb(0xff, 0xff, 0xff),
            schematic_panel: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
