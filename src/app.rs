use egui::{Key, KeyboardShortcut, Modifiers, Rect};

use crate::config::SketchpadConfig;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::session::SketchSession;

/// We derive Deserialize/Serialize so we can persist UI preferences on shutdown.
/// The drawing itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchpadApp {
    #[serde(skip)]
    session: SketchSession,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    config: SketchpadConfig,
    // Result of the last export, shown under the canvas
    #[serde(skip)]
    status: Option<String>,

    custom_sticker_text: String,
    show_history: bool,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self {
            session: SketchSession::default(),
            input: InputHandler::default(),
            renderer: Renderer::default(),
            config: SketchpadConfig::default(),
            status: None,
            custom_sticker_text: "🍊".to_owned(),
            show_history: false,
        }
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.session = SketchSession::new(&config);
        app.config = config;

        let ctx = cc.egui_ctx.clone();
        app.session.set_observer(move |change| {
            if change.requires_redraw() {
                ctx.request_repaint();
            }
        });

        app
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SketchSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn custom_sticker_text_mut(&mut self) -> &mut String {
        &mut self.custom_sticker_text
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn show_history_mut(&mut self) -> &mut bool {
        &mut self.show_history
    }

    /// Feed this frame's pointer input over `canvas_rect` to the session
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.session.handle_event(event);
        }
    }

    /// Render the drawing offscreen and hand the PNG to the platform
    pub fn export(&mut self) {
        let result = self
            .session
            .export_png(&self.config.export)
            .and_then(|bytes| export::deliver_png(&bytes, &self.config.export));

        self.status = Some(match result {
            Ok(destination) => format!("Exported to {destination}"),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        match history_shortcut(ctx) {
            Some(HistoryShortcut::Undo) => self.session.undo(),
            Some(HistoryShortcut::Redo) => self.session.redo(),
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryShortcut {
    Undo,
    Redo,
}

/// Consume this frame's undo/redo shortcut.
///
/// While a text field has focus the keys belong to it and nothing is consumed.
fn history_shortcut(ctx: &egui::Context) -> Option<HistoryShortcut> {
    if ctx.wants_keyboard_input() {
        return None;
    }

    let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
    let redo = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);

    // Redo first: the undo shortcut also matches with shift held
    if ctx.input_mut(|i| i.consume_shortcut(&redo)) {
        Some(HistoryShortcut::Redo)
    } else if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
        Some(HistoryShortcut::Undo)
    } else {
        None
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, RawInput};

    fn key_z(modifiers: Modifiers) -> RawInput {
        RawInput {
            modifiers,
            events: vec![Event::Key {
                key: Key::Z,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        }
    }

    /// Run one frame with a text field, reading the shortcut before the field is drawn
    fn frame(
        ctx: &egui::Context,
        input: RawInput,
        text: &mut String,
        focus_text: bool,
    ) -> Option<HistoryShortcut> {
        let mut shortcut = None;
        let _ = ctx.run(input, |ctx| {
            shortcut = history_shortcut(ctx);
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.text_edit_singleline(text);
                if focus_text {
                    response.request_focus();
                }
            });
        });
        shortcut
    }

    #[test]
    fn test_shortcuts_reach_history_when_canvas_has_keyboard() {
        let ctx = egui::Context::default();
        let mut text = String::new();
        assert_eq!(
            frame(&ctx, key_z(Modifiers::COMMAND), &mut text, false),
            Some(HistoryShortcut::Undo)
        );
        assert_eq!(
            frame(&ctx, key_z(Modifiers::COMMAND | Modifiers::SHIFT), &mut text, false),
            Some(HistoryShortcut::Redo)
        );
        assert_eq!(frame(&ctx, RawInput::default(), &mut text, false), None);
    }

    #[test]
    fn test_focused_text_field_keeps_undo_keys() {
        let ctx = egui::Context::default();
        let mut text = "🍊".to_owned();
        frame(&ctx, RawInput::default(), &mut text, true);
        assert_eq!(frame(&ctx, key_z(Modifiers::COMMAND), &mut text, true), None);
    }
}
