use egui::{vec2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

use super::{StrokeStyle, Surface};

/// On-screen surface backed by an egui painter.
///
/// Surface-local coordinates are offset by the canvas rect's top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            canvas_rect,
            background,
        }
    }

    fn to_screen(&self, local: Pos2) -> Pos2 {
        self.canvas_rect.min + local.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas_rect, 0.0, self.background);
    }

    fn fill_background(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas_rect, 0.0, color);
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle) {
        let from = self.to_screen(from);
        let to = self.to_screen(to);
        self.painter
            .line_segment([from, to], EguiStroke::new(style.thickness, style.color));

        // egui segments have butt ends, round them off
        let radius = style.thickness / 2.0;
        self.painter.circle_filled(from, radius, style.color);
        self.painter.circle_filled(to, radius, style.color);
    }

    fn glyph(&mut self, symbol: &str, origin: Pos2, size: f32) {
        let galley = self.painter.layout_no_wrap(
            symbol.to_owned(),
            FontId::proportional(size),
            Color32::BLACK,
        );

        // Put the first row's baseline on `origin`, matching the export
        let baseline = galley
            .rows
            .first()
            .and_then(|row| row.glyphs.first())
            .map_or(galley.size().y, |glyph| glyph.pos.y);
        let top_left = self.to_screen(origin) - vec2(0.0, baseline);
        self.painter.galley(top_left, galley, Color32::BLACK);
    }
}
