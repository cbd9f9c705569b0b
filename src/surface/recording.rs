use egui::{Color32, Pos2};

use super::{StrokeStyle, Surface};
use crate::geometry::distance_to_segment;

/// One drawing call captured by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    FillBackground(Color32),
    Segment {
        from: Pos2,
        to: Pos2,
        style: StrokeStyle,
    },
    Glyph {
        symbol: String,
        origin: Pos2,
        size: f32,
    },
}

/// Surface that records every call instead of drawing.
///
/// Lets tests check exactly what a command or a redraw would paint.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Ops recorded since the most recent `Clear`
    pub fn visible_ops(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    pub fn segments(&self) -> impl Iterator<Item = (Pos2, Pos2, StrokeStyle)> + '_ {
        self.visible_ops().iter().filter_map(|op| match op {
            SurfaceOp::Segment { from, to, style } => Some((*from, *to, *style)),
            _ => None,
        })
    }

    pub fn glyphs(&self) -> impl Iterator<Item = (&str, Pos2)> + '_ {
        self.visible_ops().iter().filter_map(|op| match op {
            SurfaceOp::Glyph { symbol, origin, .. } => Some((symbol.as_str(), *origin)),
            _ => None,
        })
    }

    /// True if a visible segment covers `point` within its half thickness
    pub fn touches(&self, point: Pos2) -> bool {
        self.segments()
            .any(|(from, to, style)| distance_to_segment(point, from, to) <= style.thickness / 2.0)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn fill_background(&mut self, color: Color32) {
        self.ops.push(SurfaceOp::FillBackground(color));
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::Segment {
            from,
            to,
            style: *style,
        });
    }

    fn glyph(&mut self, symbol: &str, origin: Pos2, size: f32) {
        self.ops.push(SurfaceOp::Glyph {
            symbol: symbol.to_owned(),
            origin,
            size,
        });
    }
}
