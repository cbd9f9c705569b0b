mod cursor;
mod history;
mod sticker;
mod stroke;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::surface::Surface;

pub use cursor::{CursorGlyph, CursorPreviewCommand};
pub use history::{CommandHistory, HistoryEntry, RedoPolicy};
pub use sticker::{StickerCommand, STICKER_OFFSET, STICKER_SIZE};
pub use stroke::StrokeCommand;

// Single static counter for all committed commands
static NEXT_COMMAND_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a committed command, stable across undo and redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(u64);

impl CommandId {
    pub fn next() -> Self {
        Self(NEXT_COMMAND_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A replayable unit of drawing work
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Stroke(StrokeCommand),
    Sticker(StickerCommand),
    CursorPreview(CursorPreviewCommand),
}

impl DrawCommand {
    /// Paint this command onto `surface`. Safe to call any number of times.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            DrawCommand::Stroke(stroke) => stroke.render(surface),
            DrawCommand::Sticker(sticker) => sticker.render(surface),
            DrawCommand::CursorPreview(preview) => preview.render(surface),
        }
    }

    /// Short description for the history panel
    pub fn label(&self) -> String {
        match self {
            DrawCommand::Stroke(stroke) => format!("Stroke ({} pts)", stroke.polyline().len()),
            DrawCommand::Sticker(sticker) => format!("Sticker {}", sticker.symbol()),
            DrawCommand::CursorPreview(_) => "Cursor".to_owned(),
        }
    }

    /// Whether this command may live in history
    pub fn is_persistent(&self) -> bool {
        !matches!(self, DrawCommand::CursorPreview(_))
    }

    pub fn as_stroke_mut(&mut self) -> Option<&mut StrokeCommand> {
        match self {
            DrawCommand::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }
}

impl From<StrokeCommand> for DrawCommand {
    fn from(stroke: StrokeCommand) -> Self {
        DrawCommand::Stroke(stroke)
    }
}

impl From<StickerCommand> for DrawCommand {
    fn from(sticker: StickerCommand) -> Self {
        DrawCommand::Sticker(sticker)
    }
}

impl From<CursorPreviewCommand> for DrawCommand {
    fn from(preview: CursorPreviewCommand) -> Self {
        DrawCommand::CursorPreview(preview)
    }
}
