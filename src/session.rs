//! The drawing session: history, tools and the pointer state machine.
//!
//! ```text
//!            pointer-down (commit stroke or sticker)
//!   ┌──────┐ ─────────────────────────────────────► ┌──────────┐
//!   │ Idle │                                        │ Dragging │ ◄─┐ pointer-move
//!   └──────┘ ◄───────────────────────────────────── └──────────┘ ──┘ (extend stroke)
//!     │  ▲         pointer-up
//!     └──┘ pointer-move (cursor preview)
//! ```
//!
//! Every mutation that changes what the canvas shows is reported through
//! [`ChangeKind`] so the host can schedule a repaint.

use egui::Pos2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::command::{CommandHistory, CommandId, CursorPreviewCommand, DrawCommand, RedoPolicy};
use crate::config::SketchpadConfig;
use crate::error::Result;
use crate::export::{self, ExportSettings};
use crate::input::InputEvent;
use crate::renderer;
use crate::sticker::StickerPalette;
use crate::surface::Surface;
use crate::tool::{MarkerColor, ToolState, MARKER_COLORS};

/// Notification sent to the host after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// History or the active stroke changed
    DrawingChanged,
    /// Only the cursor preview moved or disappeared
    ToolMoved,
    /// A custom sticker was appended to the palette
    StickerAdded,
}

impl ChangeKind {
    pub fn requires_redraw(self) -> bool {
        matches!(self, ChangeKind::DrawingChanged | ChangeKind::ToolMoved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    /// `active` names the stroke being extended; stickers have none
    Dragging { active: Option<CommandId> },
}

type Observer = Box<dyn FnMut(ChangeKind)>;

/// All mutable state of one drawing surface
pub struct SketchSession {
    history: CommandHistory,
    tools: ToolState,
    stickers: StickerPalette,
    drag: DragState,
    cursor: Option<CursorPreviewCommand>,
    thin_marker: f32,
    thick_marker: f32,
    rng: SmallRng,
    observer: Option<Observer>,
    redraw_requests: u64,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl std::fmt::Debug for SketchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SketchSession")
            .field("history", &self.history)
            .field("tools", &self.tools)
            .field("stickers", &self.stickers)
            .field("drag", &self.drag)
            .field("cursor", &self.cursor)
            .field("redraw_requests", &self.redraw_requests)
            .finish()
    }
}

impl SketchSession {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Build a session with a fixed random source, for reproducible marker colors
    pub fn with_rng(config: &SketchpadConfig, rng: SmallRng) -> Self {
        Self {
            history: CommandHistory::with_policy(config.redo_policy),
            tools: ToolState::new(config.thin_marker),
            stickers: StickerPalette::new(config.stickers.clone()),
            drag: DragState::Idle,
            cursor: None,
            thin_marker: config.thin_marker,
            thick_marker: config.thick_marker,
            rng,
            observer: None,
            redraw_requests: 0,
        }
    }

    /// Register the host callback that receives change notifications
    pub fn set_observer(&mut self, observer: impl FnMut(ChangeKind) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn notify(&mut self, change: ChangeKind) {
        if change.requires_redraw() {
            self.redraw_requests += 1;
        }
        if let Some(observer) = &mut self.observer {
            observer(change);
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn stickers(&self) -> &StickerPalette {
        &self.stickers
    }

    pub fn cursor_preview(&self) -> Option<&CursorPreviewCommand> {
        self.cursor.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Number of redraws requested so far
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.begin_drag(pos),
            InputEvent::PointerMove { pos } => match self.drag {
                DragState::Dragging { active } => self.extend_drag(active, pos),
                DragState::Idle => self.show_cursor(pos),
            },
            InputEvent::PointerUp { .. } => {
                if self.is_dragging() {
                    self.drag = DragState::Idle;
                    self.notify(ChangeKind::DrawingChanged);
                }
            }
            InputEvent::PointerEnter { pos } => {
                if !self.is_dragging() {
                    self.show_cursor(pos);
                }
            }
            InputEvent::PointerLeave { .. } => {
                self.cursor = None;
                self.notify(ChangeKind::ToolMoved);
            }
        }
    }

    /// Commit the command for the active tool right away, so the stroke is
    /// visible and undoable while the drag is still going.
    fn begin_drag(&mut self, pos: Pos2) {
        if self.is_dragging() {
            log::debug!("Pointer down while dragging, starting a new command");
        }

        let command = self.tools.begin_command(pos);
        let is_stroke = matches!(command, DrawCommand::Stroke(_));
        let id = self.history.commit(command);

        self.drag = DragState::Dragging {
            active: if is_stroke { id } else { None },
        };
        self.cursor = None;
        self.notify(ChangeKind::DrawingChanged);
    }

    fn extend_drag(&mut self, active: Option<CommandId>, pos: Pos2) {
        // The stroke may have been undone mid-drag; it keeps growing wherever it lives
        let stroke = active
            .and_then(|id| self.history.find_mut(id))
            .and_then(DrawCommand::as_stroke_mut);
        if let Some(stroke) = stroke {
            stroke.extend(pos);
        }
        self.cursor = None;
        self.notify(ChangeKind::DrawingChanged);
    }

    fn show_cursor(&mut self, pos: Pos2) {
        self.cursor = Some(CursorPreviewCommand::new(self.tools.cursor_glyph(), pos));
        self.notify(ChangeKind::ToolMoved);
    }

    pub fn select_thin_marker(&mut self) {
        self.tools.select_thin_marker(self.thin_marker);
        log::debug!("Selected thin marker");
    }

    /// Pick a random palette color for the thick marker and return it
    pub fn select_thick_marker(&mut self) -> MarkerColor {
        let color = *MARKER_COLORS
            .choose(&mut self.rng)
            .unwrap_or(&MARKER_COLORS[0]);
        self.tools.select_thick_marker(self.thick_marker, &color);
        log::debug!("Selected thick marker in {}", color.name);
        color
    }

    pub fn select_sticker(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        log::debug!("Selected sticker {symbol}");
        self.tools.select_sticker(symbol);
    }

    /// Append a sticker to the palette; it is selectable immediately
    pub fn add_custom_sticker(&mut self, symbol: impl Into<String>) -> usize {
        let index = self.stickers.add(symbol);
        log::info!("Added custom sticker #{index}");
        self.notify(ChangeKind::StickerAdded);
        index
    }

    pub fn redo_policy(&self) -> RedoPolicy {
        self.history.policy()
    }

    /// Applies to commits from now on; the current stacks are left alone
    pub fn set_redo_policy(&mut self, policy: RedoPolicy) {
        log::debug!("Redo policy set to {policy:?}");
        self.history.set_policy(policy);
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.notify(ChangeKind::DrawingChanged);
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.notify(ChangeKind::DrawingChanged);
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.notify(ChangeKind::DrawingChanged);
    }

    /// Repaint `surface` from history, with the cursor preview on top
    pub fn redraw(&self, surface: &mut dyn Surface) {
        renderer::redraw(surface, self.history.commands(), self.cursor.as_ref());
    }

    /// Render the committed drawing offscreen and encode it as PNG
    pub fn export_png(&self, settings: &ExportSettings) -> Result<Vec<u8>> {
        let surface = export::render_export(self.history.commands(), settings)?;
        export::encode_png(&surface.into_rgba_image())
    }
}
