// File: crates/wavelab-core/src/legend.rs
// Summary: Two-entry legend strip naming the AM curves.

use crate::error::PlotResult;
use crate::surface::{DrawingSurface, Scene};
use crate::theme::Theme;
use crate::types::{Color, FontSpec, StrokeStyle};

const LINE_X: f64 = 5.0;
const LINE_LENGTH: f64 = 30.0;
const LABEL_GAP: f64 = 10.0;
const LABEL_BASELINE_DROP: f64 = 5.0;
const LABEL_FONT_PX: f32 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    /// Row position as a fraction of surface height.
    pub y_frac: f64,
}

#[derive(Clone, Debug)]
pub struct LegendScene {
    pub entries: Vec<LegendEntry>,
    pub text_color: Color,
}

impl LegendScene {
    pub fn for_am(theme: &Theme) -> Self {
        Self {
            entries: vec![
                LegendEntry { label: "Carrier".into(), color: theme.carrier, y_frac: 0.2 },
                LegendEntry { label: "Modulator".into(), color: theme.modulator, y_frac: 0.6 },
            ],
            text_color: theme.legend_text,
        }
    }
}

impl Scene for LegendScene {
    fn name(&self) -> &str { "legend" }

    fn render(&self, surface: &mut dyn DrawingSurface) -> PlotResult<()> {
        let h = surface.height() as f64;
        let font = FontSpec::new(LABEL_FONT_PX);
        for e in &self.entries {
            let y = e.y_frac * h;
            surface.begin_path();
            surface.move_to(LINE_X, y);
            surface.line_to(LINE_X + LINE_LENGTH, y);
            surface.stroke(&StrokeStyle::new(e.color, 2.0));
        }
        for e in &self.entries {
            let y = e.y_frac * h;
            surface.fill_text(&e.label, LINE_X + LINE_LENGTH + LABEL_GAP, y + LABEL_BASELINE_DROP, &font, self.text_color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;

    #[test]
    fn lines_and_labels_follow_height() {
        let mut s = RecordingSurface::new(200, 50);
        LegendScene::for_am(&Theme::classic()).render(&mut s).expect("render");

        let paths = s.stroked_paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].points, vec![(5.0, 10.0), (35.0, 10.0)]);
        assert_eq!(paths[1].points, vec![(5.0, 30.0), (35.0, 30.0)]);
        assert_eq!(paths[1].style.color, Theme::classic().modulator);

        assert_eq!(s.texts(), vec![("Carrier", 45.0, 15.0), ("Modulator", 45.0, 35.0)]);
    }
}
