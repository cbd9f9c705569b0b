use egui::{Color32, Painter, Rect, Stroke};

use crate::command::{CursorPreviewCommand, DrawCommand};
use crate::session::SketchSession;
use crate::surface::{PainterSurface, Surface};

/// Clear `surface` and replay `commands` oldest first, then the cursor preview.
///
/// The preview always lands on top and is the only transient thing drawn.
pub fn redraw<'a>(
    surface: &mut dyn Surface,
    commands: impl IntoIterator<Item = &'a DrawCommand>,
    preview: Option<&CursorPreviewCommand>,
) {
    surface.clear();
    for command in commands {
        command.render(surface);
    }
    if let Some(preview) = preview {
        preview.render(surface);
    }
}

/// Paints the session onto the on-screen canvas
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    border: Stroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            border: Stroke::new(1.0, Color32::from_gray(160)),
        }
    }
}

impl Renderer {
    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with, clipped to the canvas
    ///     rect (egui::Rect): The canvas rectangle in screen coordinates
    ///     session (SketchSession): The session whose history is replayed
    pub fn render(&self, painter: &Painter, rect: Rect, session: &SketchSession) {
        let mut surface = PainterSurface::new(painter, rect, self.background);
        session.redraw(&mut surface);
        painter.rect_stroke(rect, 0.0, self.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CursorGlyph, StickerCommand, StrokeCommand};
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::pos2;

    #[test]
    fn test_redraw_clears_first_and_overlays_preview_last() {
        let stroke: DrawCommand = StrokeCommand::new(
            vec![pos2(0.0, 0.0), pos2(5.0, 0.0)].into(),
            3.0,
            Color32::BLACK,
        )
        .into();
        let sticker: DrawCommand = StickerCommand::new("🌸", pos2(20.0, 20.0)).into();
        let preview = CursorPreviewCommand::new(CursorGlyph::Dot, pos2(9.0, 9.0));

        let mut surface = RecordingSurface::new();
        redraw(&mut surface, [&stroke, &sticker], Some(&preview));

        let ops = surface.ops();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0], SurfaceOp::Clear);
        assert!(matches!(ops[1], SurfaceOp::Segment { .. }));
        assert!(matches!(&ops[2], SurfaceOp::Glyph { symbol, .. } if symbol == "🌸"));
        assert!(matches!(&ops[3], SurfaceOp::Glyph { symbol, .. } if symbol == "⏺"));
    }

    #[test]
    fn test_redraw_of_empty_history_only_clears() {
        let mut surface = RecordingSurface::new();
        redraw(&mut surface, std::iter::empty(), None);
        assert_eq!(surface.ops(), &[SurfaceOp::Clear]);
    }

    fn painted_shapes(session: &SketchSession) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(256.0, 256.0));
            let painter = ctx.layer_painter(egui::LayerId::background());
            Renderer::default().render(&painter, rect, session);
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    #[test]
    fn test_render_onto_painter() {
        // Background fill and border only
        let empty = painted_shapes(&SketchSession::default());
        assert_eq!(empty.len(), 2);
        assert!(matches!(empty[0], egui::Shape::Rect(_)));
        assert!(matches!(empty[1], egui::Shape::Rect(_)));

        let mut session = SketchSession::default();
        session.handle_event(crate::input::InputEvent::PointerDown { pos: pos2(10.0, 10.0) });
        session.handle_event(crate::input::InputEvent::PointerMove { pos: pos2(40.0, 10.0) });

        // One segment with two cap circles between the fill and the border
        let shapes = painted_shapes(&session);
        assert_eq!(shapes.len(), 5);
        assert!(matches!(shapes[1], egui::Shape::LineSegment { .. }));
        assert!(matches!(shapes[4], egui::Shape::Rect(_)));
    }
}
