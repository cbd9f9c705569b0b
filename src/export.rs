//! Offscreen PNG export of the committed drawing.
//!
//! The committed commands are replayed at a higher resolution onto an opaque
//! white buffer. The cursor preview is never part of an export.

use std::io::Cursor;

use egui::Color32;
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::command::DrawCommand;
use crate::error::Result;
use crate::surface::{RasterSurface, Surface};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Width and height of the exported image in pixels
    pub size: u32,
    /// Logical-to-pixel scale applied while replaying
    pub scale: f32,
    /// Download name on the web, output path on native
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            size: 1024,
            scale: 4.0,
            file_name: "sketchpad.png".to_owned(),
        }
    }
}

/// Replay `commands` onto a fresh white raster
pub fn render_export<'a>(
    commands: impl IntoIterator<Item = &'a DrawCommand>,
    settings: &ExportSettings,
) -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(settings.size, settings.size, settings.scale)?;
    surface.fill_background(Color32::WHITE);
    for command in commands.into_iter().filter(|c| c.is_persistent()) {
        command.render(&mut surface);
    }
    Ok(surface)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Hand the encoded PNG to the user and describe where it went
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver_png(bytes: &[u8], settings: &ExportSettings) -> Result<String> {
    let path = std::path::Path::new(&settings.file_name);
    std::fs::write(path, bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path.display().to_string())
}

/// Hand the encoded PNG to the user and describe where it went
#[cfg(target_arch = "wasm32")]
pub fn deliver_png(bytes: &[u8], settings: &ExportSettings) -> Result<String> {
    web::download(bytes, &settings.file_name)?;
    log::info!("Downloaded {} bytes as {}", bytes.len(), settings.file_name);
    Ok(settings.file_name.clone())
}

#[cfg(target_arch = "wasm32")]
mod web {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    use crate::error::{Result, SketchpadError};

    fn js_err(err: JsValue) -> SketchpadError {
        SketchpadError::Web(format!("{err:?}"))
    }

    /// Trigger a browser download through a temporary object URL
    pub fn download(bytes: &[u8], file_name: &str) -> Result<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SketchpadError::Web("No document".to_owned()))?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| SketchpadError::Web("Created element is not an anchor".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(js_err)
    }
}
