#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod sticker;
pub mod surface;
pub mod tool;

pub use app::SketchpadApp;
pub use command::{CommandHistory, DrawCommand, RedoPolicy};
pub use config::SketchpadConfig;
pub use error::SketchpadError;
pub use input::InputEvent;
pub use renderer::Renderer;
pub use session::{ChangeKind, SketchSession};
pub use surface::Surface;
pub use tool::Tool;
