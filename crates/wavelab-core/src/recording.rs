// File: crates/wavelab-core/src/recording.rs
// Summary: Headless surface that records draw calls; used by tests and CSV export.

use crate::surface::DrawingSurface;
use crate::types::{Bitmap, Color, Fill, FontSpec, StrokeStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Circle { cx: f64, cy: f64, radius: f64 },
    Stroke(StrokeStyle),
    Fill(Fill),
    DrawImage { width: u32, height: u32, x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64, size_px: f32, color: Color },
}

/// A path that was stroked: its points in order and the style used.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    pub points: Vec<(f64, f64)>,
    pub style: StrokeStyle,
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    /// Replay the log and return every stroked path, in order.
    /// Sub-paths are concatenated; circles do not contribute points.
    pub fn stroked_paths(&self) -> Vec<StrokedPath> {
        let mut out = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => current.clear(),
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => current.push((*x, *y)),
                DrawCommand::Stroke(style) => out.push(StrokedPath { points: current.clone(), style: *style }),
                _ => {}
            }
        }
        out
    }

    /// Text draws, in order.
    pub fn texts(&self) -> Vec<(&str, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }
    fn begin_path(&mut self) { self.commands.push(DrawCommand::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.commands.push(DrawCommand::MoveTo { x, y }); }
    fn line_to(&mut self, x: f64, y: f64) { self.commands.push(DrawCommand::LineTo { x, y }); }
    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.commands.push(DrawCommand::Circle { cx, cy, radius });
    }
    fn stroke(&mut self, style: &StrokeStyle) { self.commands.push(DrawCommand::Stroke(*style)); }
    fn fill(&mut self, fill: &Fill) { self.commands.push(DrawCommand::Fill(fill.clone())); }
    fn draw_image(&mut self, bitmap: &Bitmap, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::DrawImage { width: bitmap.width, height: bitmap.height, x, y, w, h });
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::FillText { text: text.to_owned(), x, y, size_px: font.size_px, color });
    }
}
