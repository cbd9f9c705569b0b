use thiserror::Error;

/// Errors raised at the edges of the sketchpad: config loading and export.
///
/// Drawing, undo and redo never fail; empty-stack operations are no-ops.
#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("Cannot create a {width}x{height} surface")]
    InvalidSurfaceSize { width: u32, height: u32 },

    #[error("Failed to read config: {0}")]
    ConfigIo(#[source] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Web(String),
}

pub type Result<T, E = SketchpadError> = std::result::Result<T, E>;
