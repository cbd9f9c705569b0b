use egui::{Color32, Pos2};

use crate::command::{CursorGlyph, DrawCommand, StickerCommand, StrokeCommand};
use crate::geometry::Polyline;

pub const THIN_MARKER: f32 = 3.0;
pub const THICK_MARKER: f32 = 10.0;

/// A marker color and the swatch symbol shown for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerColor {
    pub symbol: &'static str,
    pub name: &'static str,
    pub color: Color32,
}

pub const MARKER_COLORS: [MarkerColor; 7] = [
    MarkerColor { symbol: "⚫️", name: "black", color: Color32::BLACK },
    MarkerColor { symbol: "🟣", name: "purple", color: Color32::from_rgb(128, 0, 128) },
    MarkerColor { symbol: "🔵", name: "blue", color: Color32::from_rgb(0, 0, 255) },
    MarkerColor { symbol: "🟢", name: "green", color: Color32::from_rgb(0, 128, 0) },
    MarkerColor { symbol: "🟡", name: "yellow", color: Color32::from_rgb(255, 255, 0) },
    MarkerColor { symbol: "🟠", name: "orange", color: Color32::from_rgb(255, 165, 0) },
    MarkerColor { symbol: "🔴", name: "red", color: Color32::from_rgb(255, 0, 0) },
];

/// The tool used by the next pointer-down
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    ThinMarker,
    ThickMarker,
    Sticker(String),
}

impl Tool {
    pub fn name(&self) -> &str {
        match self {
            Tool::ThinMarker => "Thin marker",
            Tool::ThickMarker => "Thick marker",
            Tool::Sticker(_) => "Sticker",
        }
    }
}

/// Active tool plus the marker settings read on pointer-down.
///
/// Changing any of these never touches a drag already in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    thickness: f32,
    color: Color32,
    swatch: Option<&'static str>,
}

impl ToolState {
    pub fn new(thin: f32) -> Self {
        Self {
            tool: Tool::ThinMarker,
            thickness: thin,
            color: Color32::BLACK,
            swatch: None,
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// The thin marker always draws in black
    pub fn select_thin_marker(&mut self, thickness: f32) {
        self.tool = Tool::ThinMarker;
        self.thickness = thickness;
        self.color = Color32::BLACK;
        self.swatch = None;
    }

    pub fn select_thick_marker(&mut self, thickness: f32, color: &MarkerColor) {
        self.tool = Tool::ThickMarker;
        self.thickness = thickness;
        self.color = color.color;
        self.swatch = Some(color.symbol);
    }

    /// Marker thickness and color are kept for the next marker selection
    pub fn select_sticker(&mut self, symbol: impl Into<String>) {
        self.tool = Tool::Sticker(symbol.into());
    }

    pub fn cursor_glyph(&self) -> CursorGlyph {
        match (&self.tool, self.swatch) {
            (Tool::Sticker(symbol), _) => CursorGlyph::Sticker(symbol.clone()),
            (_, Some(swatch)) => CursorGlyph::Swatch(swatch.to_owned()),
            (_, None) => CursorGlyph::Dot,
        }
    }

    /// Build the command a pointer-down at `pos` starts
    pub fn begin_command(&self, pos: Pos2) -> DrawCommand {
        match &self.tool {
            Tool::ThinMarker | Tool::ThickMarker => {
                StrokeCommand::new(Polyline::starting_at(pos), self.thickness, self.color).into()
            }
            Tool::Sticker(symbol) => StickerCommand::new(symbol.clone(), pos).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_default_is_thin_black_dot() {
        let state = ToolState::new(THIN_MARKER);
        assert_eq!(state.tool(), &Tool::ThinMarker);
        assert_eq!(state.tool().name(), "Thin marker");
        assert_eq!(state.cursor_glyph(), CursorGlyph::Dot);
        match state.begin_command(pos2(1.0, 2.0)) {
            DrawCommand::Stroke(stroke) => {
                assert_eq!(stroke.style().thickness, THIN_MARKER);
                assert_eq!(stroke.style().color, Color32::BLACK);
                assert_eq!(stroke.polyline().points(), &[pos2(1.0, 2.0)]);
            }
            other => panic!("Expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_thick_marker_uses_swatch_cursor() {
        let mut state = ToolState::new(THIN_MARKER);
        state.select_thick_marker(THICK_MARKER, &MARKER_COLORS[2]);
        assert_eq!(state.color(), MARKER_COLORS[2].color);
        assert_eq!(state.cursor_glyph(), CursorGlyph::Swatch("🔵".to_owned()));

        state.select_thin_marker(THIN_MARKER);
        assert_eq!(state.color(), Color32::BLACK);
        assert_eq!(state.cursor_glyph(), CursorGlyph::Dot);
    }

    #[test]
    fn test_sticker_tool_builds_sticker_command() {
        let mut state = ToolState::new(THIN_MARKER);
        state.select_sticker("🌈");
        assert_eq!(state.cursor_glyph(), CursorGlyph::Sticker("🌈".to_owned()));
        assert_eq!(
            state.begin_command(pos2(30.0, 30.0)),
            StickerCommand::new("🌈", pos2(30.0, 30.0)).into()
        );
    }
}
