use egui::{Context, PointerButton, Pos2, Rect};

use crate::geometry::Point;

/// Pointer events already mapped to canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(Point),
    /// Pointer moved while the primary button is held
    PointerMove(Point),
    /// Primary button released, wherever the pointer is
    PointerUp(Point),
}

/// Raw pointer facts for one frame, as read from egui
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub moved: bool,
}

impl PointerFrame {
    pub fn read(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            moved: input.pointer.is_moving(),
        })
    }
}

/// Turns egui pointer input into gesture events for the canvas
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Set between a press that landed on the canvas and its release
    dragging: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            dragging: false,
            last_pos: None,
        }
    }

    /// Update the on-screen canvas rectangle (e.g. after scrolling)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Screen position to canvas pixel. The canvas is shown at 1:1 scale.
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::from_pos2(pos - self.canvas_rect.min.to_vec2())
    }

    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process_frame(PointerFrame::read(ctx))
    }

    pub fn process_frame(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pos = frame.position.or(self.last_pos);

        if frame.pressed && !self.dragging {
            if let Some(pos) = pos.filter(|p| self.canvas_rect.contains(*p)) {
                self.dragging = true;
                events.push(InputEvent::PointerDown(self.to_canvas(pos)));
            }
        } else if self.dragging && frame.moved {
            if let Some(pos) = pos {
                events.push(InputEvent::PointerMove(self.to_canvas(pos)));
            }
        }

        if frame.released && self.dragging {
            // Releasing off-canvas still has to close the gesture
            if let Some(pos) = pos {
                events.push(InputEvent::PointerUp(self.to_canvas(pos)));
            }
            self.dragging = false;
        }

        self.last_pos = pos;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 100.0)))
    }

    fn frame(x: f32, y: f32) -> PointerFrame {
        PointerFrame {
            position: Some(pos2(x, y)),
            ..PointerFrame::default()
        }
    }

    #[test]
    fn test_to_canvas_offsets_by_rect_origin() {
        assert_eq!(handler().to_canvas(pos2(110.0, 75.0)), Point::new(10, 25));
    }

    #[test]
    fn test_full_drag() {
        let mut input = handler();
        let down = input.process_frame(PointerFrame {
            pressed: true,
            ..frame(110.0, 60.0)
        });
        assert_eq!(down, vec![InputEvent::PointerDown(Point::new(10, 10))]);

        let moved = input.process_frame(PointerFrame {
            moved: true,
            ..frame(130.0, 70.0)
        });
        assert_eq!(moved, vec![InputEvent::PointerMove(Point::new(30, 20))]);

        let up = input.process_frame(PointerFrame {
            released: true,
            ..frame(140.0, 70.0)
        });
        assert_eq!(up, vec![InputEvent::PointerUp(Point::new(40, 20))]);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.process_frame(PointerFrame {
            pressed: true,
            ..frame(10.0, 10.0)
        });
        assert!(events.is_empty());
        let events = input.process_frame(PointerFrame {
            released: true,
            ..frame(10.0, 10.0)
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_release_off_canvas_closes_gesture() {
        let mut input = handler();
        input.process_frame(PointerFrame {
            pressed: true,
            ..frame(150.0, 100.0)
        });
        let events = input.process_frame(PointerFrame {
            released: true,
            position: None,
            ..PointerFrame::default()
        });
        assert_eq!(events, vec![InputEvent::PointerUp(Point::new(50, 50))]);
    }
}
