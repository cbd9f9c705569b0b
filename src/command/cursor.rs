use egui::{vec2, Pos2, Vec2};

use super::sticker::{STICKER_OFFSET, STICKER_SIZE};
use crate::surface::Surface;

/// Glyph shown under the pointer for the active tool
#[derive(Debug, Clone, PartialEq)]
pub enum CursorGlyph {
    /// Thin marker
    Dot,
    /// Thick marker, showing the swatch of its color
    Swatch(String),
    /// Sticker tool, showing the sticker itself
    Sticker(String),
}

impl CursorGlyph {
    pub fn symbol(&self) -> &str {
        match self {
            CursorGlyph::Dot => "⏺",
            CursorGlyph::Swatch(symbol) | CursorGlyph::Sticker(symbol) => symbol,
        }
    }

    fn size(&self) -> f32 {
        match self {
            CursorGlyph::Dot => 8.0,
            CursorGlyph::Swatch(_) => 22.0,
            CursorGlyph::Sticker(_) => STICKER_SIZE,
        }
    }

    fn offset(&self) -> Vec2 {
        match self {
            CursorGlyph::Dot => vec2(-3.0, 2.0),
            CursorGlyph::Swatch(_) => vec2(-8.0, 6.0),
            CursorGlyph::Sticker(_) => STICKER_OFFSET,
        }
    }
}

/// Transient tool indicator that follows the pointer while not drawing.
///
/// Rebuilt on every idle pointer move, drawn above everything else and never
/// stored in history or exported.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPreviewCommand {
    glyph: CursorGlyph,
    position: Pos2,
}

impl CursorPreviewCommand {
    pub fn new(glyph: CursorGlyph, position: Pos2) -> Self {
        Self { glyph, position }
    }

    pub fn glyph(&self) -> &CursorGlyph {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(
            self.glyph.symbol(),
            self.position + self.glyph.offset(),
            self.glyph.size(),
        );
    }
}
