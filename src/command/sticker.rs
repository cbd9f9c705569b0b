use egui::{vec2, Pos2, Vec2};

use crate::surface::Surface;

/// Glyph size used for placed stickers
pub const STICKER_SIZE: f32 = 32.0;

/// Shift from the anchor to the glyph's baseline origin, roughly centering an emoji
pub const STICKER_OFFSET: Vec2 = vec2(-18.0, 8.0);

/// A sticker glyph placed once at a fixed point
#[derive(Debug, Clone, PartialEq)]
pub struct StickerCommand {
    symbol: String,
    anchor: Pos2,
}

impl StickerCommand {
    pub fn new(symbol: impl Into<String>, anchor: Pos2) -> Self {
        Self {
            symbol: symbol.into(),
            anchor,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.symbol, self.anchor + STICKER_OFFSET, STICKER_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use egui::pos2;

    #[test]
    fn test_renders_only_the_glyph() {
        let sticker = StickerCommand::new("🌸", pos2(50.0, 50.0));
        let mut surface = RecordingSurface::new();
        sticker.render(&mut surface);

        assert_eq!(surface.segments().count(), 0);
        assert_eq!(surface.glyphs().collect::<Vec<_>>(), vec![("🌸", pos2(32.0, 58.0))]);
    }
}
