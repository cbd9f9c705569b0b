use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events delivered to the sketch session.
///
/// Positions are in surface-local coordinates (canvas top-left is the origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { pos: Pos2 },
    /// Primary button was released
    PointerUp { pos: Pos2 },
    /// Pointer entered the canvas
    PointerEnter { pos: Pos2 },
    /// Pointer left the canvas
    PointerLeave { last_known_pos: Pos2 },
}

/// Handles converting raw egui input into canvas-local InputEvents
#[derive(Debug)]
pub struct InputHandler {
    /// Last pointer position seen inside the canvas, in screen coordinates
    last_inside: Option<Pos2>,
    /// Whether a press started on the canvas and has not been released yet
    pressed: bool,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_inside: None,
            pressed: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the panel is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.translate(hover, pressed, released)
    }

    /// Turn one frame of pointer state into events.
    ///
    /// Enter, leave and move come first, then press, then release, so a click
    /// within a single frame still yields down followed by up.
    pub fn translate(&mut self, hover: Option<Pos2>, pressed: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = hover.filter(|pos| self.canvas_rect.contains(*pos));

        match (self.last_inside, inside) {
            (None, Some(pos)) => events.push(InputEvent::PointerEnter {
                pos: self.to_local(pos),
            }),
            (Some(last), None) => events.push(InputEvent::PointerLeave {
                last_known_pos: self.to_local(last),
            }),
            (Some(last), Some(pos)) if last != pos => events.push(InputEvent::PointerMove {
                pos: self.to_local(pos),
            }),
            _ => {}
        }

        if pressed {
            if let Some(pos) = inside {
                events.push(InputEvent::PointerDown {
                    pos: self.to_local(pos),
                });
                self.pressed = true;
            }
        }

        // A release anywhere ends a drag that began on the canvas
        if released && self.pressed {
            let pos = inside.or(hover).or(self.last_inside).unwrap_or(self.canvas_rect.min);
            events.push(InputEvent::PointerUp {
                pos: self.to_local(pos),
            });
            self.pressed = false;
        }

        self.last_inside = inside;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(356.0, 306.0)))
    }

    #[test]
    fn test_enter_move_leave() {
        let mut input = handler();
        assert_eq!(
            input.translate(Some(pos2(110.0, 60.0)), false, false),
            vec![InputEvent::PointerEnter { pos: pos2(10.0, 10.0) }]
        );
        assert_eq!(
            input.translate(Some(pos2(120.0, 60.0)), false, false),
            vec![InputEvent::PointerMove { pos: pos2(20.0, 10.0) }]
        );
        assert!(input.translate(Some(pos2(120.0, 60.0)), false, false).is_empty());
        assert_eq!(
            input.translate(Some(pos2(10.0, 10.0)), false, false),
            vec![InputEvent::PointerLeave { last_known_pos: pos2(20.0, 10.0) }]
        );
    }

    #[test]
    fn test_click_in_one_frame() {
        let mut input = handler();
        input.translate(Some(pos2(110.0, 60.0)), false, false);
        assert_eq!(
            input.translate(Some(pos2(110.0, 60.0)), true, true),
            vec![
                InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
                InputEvent::PointerUp { pos: pos2(10.0, 10.0) },
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        assert!(input.translate(Some(pos2(10.0, 10.0)), true, false).is_empty());
        assert!(input.translate(Some(pos2(10.0, 10.0)), false, true).is_empty());
    }

    #[test]
    fn test_release_outside_ends_drag() {
        let mut input = handler();
        input.translate(Some(pos2(110.0, 60.0)), true, false);
        let events = input.translate(Some(pos2(10.0, 10.0)), false, true);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerLeave { last_known_pos: pos2(10.0, 10.0) },
                InputEvent::PointerUp { pos: pos2(-90.0, -40.0) },
            ]
        );
    }
}
