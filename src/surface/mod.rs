//! Drawing targets that commands render onto.
//!
//! The on-screen canvas, the offscreen export buffer and the recording fake used
//! in tests all implement [`Surface`], so the same command replay feeds all three.

use egui::{Color32, Pos2};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{RecordingSurface, SurfaceOp};

/// Line appearance for one stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub thickness: f32,
    pub color: Color32,
}

impl StrokeStyle {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self { thickness, color }
    }
}

/// A 2D raster target in surface-local coordinates.
pub trait Surface {
    /// Erase everything back to the surface's blank state
    fn clear(&mut self);

    /// Paint the whole surface with an opaque color
    fn fill_background(&mut self, color: Color32);

    /// Draw one straight segment with round caps
    fn line_segment(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle);

    /// Draw text with `origin` at the left end of its baseline
    fn glyph(&mut self, symbol: &str, origin: Pos2, size: f32);
}
