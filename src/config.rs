use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::RedoPolicy;
use crate::error::{Result, SketchpadError};
use crate::export::ExportSettings;
use crate::sticker::{starter_stickers, StickerDef};
use crate::tool::{THICK_MARKER, THIN_MARKER};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "STICKER_SKETCHPAD_CONFIG";

/// Startup settings for the sketchpad.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Side length of the square on-screen canvas in points
    pub canvas_size: f32,
    pub thin_marker: f32,
    pub thick_marker: f32,
    /// Stickers available before any custom ones are added
    pub stickers: Vec<StickerDef>,
    pub redo_policy: RedoPolicy,
    pub export: ExportSettings,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            thin_marker: THIN_MARKER,
            thick_marker: THICK_MARKER,
            stickers: starter_stickers(),
            redo_policy: RedoPolicy::default(),
            export: ExportSettings::default(),
        }
    }
}

impl SketchpadConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(SketchpadError::ConfigIo)?;
        Self::from_json(&text)
    }

    /// Load from the file named by [`CONFIG_ENV`], falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {path}: {err}");
                Self::default()
            }
        }
    }

    /// The web build has no config file
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SketchpadConfig::from_json(
            r#"{ "thick_marker": 14.0, "redo_policy": "DiscardOnCommit", "export": { "size": 512 } }"#,
        )
        .unwrap();

        assert_eq!(config.thick_marker, 14.0);
        assert_eq!(config.thin_marker, THIN_MARKER);
        assert_eq!(config.redo_policy, RedoPolicy::DiscardOnCommit);
        assert_eq!(config.export.size, 512);
        assert_eq!(config.export.scale, 4.0);
        assert_eq!(config.stickers.len(), 3);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = SketchpadConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SketchpadError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SketchpadConfig::load_from(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SketchpadError::ConfigIo(_)));
    }
}
