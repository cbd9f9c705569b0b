use std::sync::OnceLock;

use egui::{Color32, Pos2};
use fontdb::{Database, Family, Query};
use image::{Rgba, RgbaImage};
use rusttype::{point as rt_point, Font, PositionedGlyph, Scale};
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{StrokeStyle, Surface};
use crate::error::SketchpadError;

/// Fallback families for characters the bundled fonts lack
const SYSTEM_FAMILIES: [Family<'static>; 3] = [
    Family::Name("Symbola"),
    Family::Name("DejaVu Sans"),
    Family::SansSerif,
];

/// Fonts tried in order for every character of a glyph run.
///
/// The bundled egui fonts come first so stickers export the same on native and web.
struct GlyphFonts {
    fonts: Vec<Font<'static>>,
}

impl GlyphFonts {
    fn load() -> Self {
        let bundled = [
            ("Noto Emoji", epaint_default_fonts::NOTO_EMOJI_REGULAR),
            ("Emoji Icon", epaint_default_fonts::EMOJI_ICON),
            ("Ubuntu Light", epaint_default_fonts::UBUNTU_LIGHT),
        ];
        let mut fonts: Vec<Font<'static>> = bundled
            .into_iter()
            .filter_map(|(name, data)| {
                let font = Font::try_from_bytes(data);
                if font.is_none() {
                    log::warn!("Failed to parse bundled font {name}");
                }
                font
            })
            .collect();
        fonts.extend(load_system_font());

        if fonts.is_empty() {
            log::warn!("No usable font found, exported images will omit stickers");
        }
        Self { fonts }
    }

    /// First font with a real glyph for `ch`. Glyph 0 is the notdef box.
    fn font_for(&self, ch: char) -> Option<&Font<'static>> {
        self.fonts.iter().find(|font| font.glyph(ch).id().0 != 0)
    }
}

/// Offscreen pixel surface used for export.
///
/// Drawing calls take logical coordinates and are scaled by `scale` onto the
/// pixmap, so a 256x256 drawing lands on a 1024x1024 buffer at scale 4.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    fonts: Option<&'static GlyphFonts>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self, SketchpadError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(SketchpadError::InvalidSurfaceSize { width, height })?;
        Ok(Self {
            pixmap,
            scale,
            fonts: Some(glyph_fonts()),
        })
    }

    /// Drop the glyph fonts so stickers are skipped
    pub fn without_glyphs(mut self) -> Self {
        self.fonts = None;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Read back one pixel in buffer coordinates
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        image
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    /// Composite a black glyph over the premultiplied pixmap
    fn blend_black(&mut self, glyph: &PositionedGlyph<'_>) {
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            return;
        };
        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        let data = self.pixmap.data_mut();

        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bounding_box.min.x;
            let py = gy as i32 + bounding_box.min.y;
            if px < 0 || px >= width || py < 0 || py >= height || coverage <= 0.0 {
                return;
            }

            let idx = ((py * width + px) * 4) as usize;
            let keep = 1.0 - coverage.min(1.0);
            let pixel = &mut data[idx..idx + 4];
            pixel[0] = (pixel[0] as f32 * keep) as u8;
            pixel[1] = (pixel[1] as f32 * keep) as u8;
            pixel[2] = (pixel[2] as f32 * keep) as u8;
            pixel[3] = (255.0 * coverage.min(1.0) + pixel[3] as f32 * keep) as u8;
        });
    }
}

fn skia_color(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn fill_background(&mut self, color: Color32) {
        self.pixmap.fill(skia_color(color));
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(skia_color(style.color));
        paint.anti_alias = true;
        let stroke = Stroke {
            width: style.thickness,
            line_cap: LineCap::Round,
            ..Default::default()
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, transform, None);
    }

    fn glyph(&mut self, symbol: &str, origin: Pos2, size: f32) {
        let Some(fonts) = self.fonts else {
            return;
        };

        let scale = Scale::uniform(size * self.scale);
        let baseline = origin.y * self.scale;
        let mut caret = origin.x * self.scale;

        for ch in symbol.chars() {
            let Some(font) = fonts.font_for(ch) else {
                log::debug!("No font covers {ch:?}, skipping it");
                continue;
            };
            let glyph = font.glyph(ch).scaled(scale);
            let advance = glyph.h_metrics().advance_width;
            self.blend_black(&glyph.positioned(rt_point(caret, baseline)));
            caret += advance;
        }
    }
}

fn glyph_fonts() -> &'static GlyphFonts {
    static FONTS: OnceLock<GlyphFonts> = OnceLock::new();
    FONTS.get_or_init(GlyphFonts::load)
}

fn load_system_font() -> Option<Font<'static>> {
    let mut db = Database::new();
    db.load_system_fonts();

    for family in &SYSTEM_FAMILIES {
        let families = [family.clone()];
        let query = Query {
            families: &families,
            ..Query::default()
        };
        let Some(id) = db.query(&query) else {
            continue;
        };
        let font = db
            .with_face_data(id, |data, index| {
                Font::try_from_vec_and_index(data.to_vec(), index)
            })
            .flatten();
        if let Some(font) = font {
            log::debug!("Fallback glyph font: {:?}", family);
            return Some(font);
        }
    }
    None
}
