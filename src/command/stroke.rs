use egui::{Color32, Pos2};

use crate::geometry::Polyline;
use crate::surface::{StrokeStyle, Surface};

/// A freehand marker stroke.
///
/// The polyline keeps growing while the drag that created it is in progress;
/// thickness and color are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommand {
    polyline: Polyline,
    style: StrokeStyle,
}

impl StrokeCommand {
    pub fn new(polyline: Polyline, thickness: f32, color: Color32) -> Self {
        Self {
            polyline,
            style: StrokeStyle::new(thickness, color),
        }
    }

    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn extend(&mut self, point: Pos2) {
        self.polyline.push(point);
    }

    /// Draw each consecutive pair of points as its own segment.
    ///
    /// A single-point stroke (click without drag) leaves no mark.
    pub fn render(&self, surface: &mut dyn Surface) {
        for (from, to) in self.polyline.segments() {
            surface.line_segment(from, to, &self.style);
        }
    }
}
