use egui::{Context, Key, Pos2, Rect};

use crate::geometry::CanvasTransform;
use crate::state::EditorContext;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// Pointer moved (with or without the button held)
    PointerMove { location: InputLocation },
    /// Pointer left the canvas or the window
    PointerLeave { last_known_location: InputLocation },
}

/// Keyboard shortcuts understood by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

/// The slice of egui's pointer state the canvas cares about in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerFrame {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process one frame of pointer state into events, in the order they happened
    pub fn process(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let last = self.last_pointer_pos.map(|pos| self.make_location(pos));

        match frame.hover_pos {
            Some(pos) => {
                let location = self.make_location(pos);
                if let Some(last) = last {
                    if last.is_in_canvas && !location.is_in_canvas {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: last,
                        });
                    }
                }
                if Some(pos) != self.last_pointer_pos && location.is_in_canvas {
                    events.push(InputEvent::PointerMove { location });
                }
                if frame.primary_pressed && location.is_in_canvas {
                    events.push(InputEvent::PointerDown { location });
                }
                if frame.primary_released {
                    events.push(InputEvent::PointerUp { location });
                }
                self.last_pointer_pos = Some(pos);
            }
            None => {
                // Pointer left the window
                if let Some(last) = last {
                    events.push(InputEvent::PointerLeave {
                        last_known_location: last,
                    });
                }
                self.last_pointer_pos = None;
            }
        }

        events
    }

    /// Poll egui for this frame's pointer state
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process(PointerFrame::from_context(ctx))
    }
}

/// Apply canvas events to the editor, mapping screen positions to logical coordinates
pub fn dispatch(events: &[InputEvent], transform: &CanvasTransform, editor: &mut EditorContext) {
    for event in events {
        match event {
            InputEvent::PointerDown { location } => editor.pointer_down(transform.to_logical(location.position)),
            InputEvent::PointerMove { location } => editor.pointer_move(transform.to_logical(location.position)),
            InputEvent::PointerUp { .. } => editor.pointer_up(),
            InputEvent::PointerLeave { .. } => editor.pointer_leave(),
        }
    }
}

/// Undo/redo shortcuts pressed this frame
pub fn shortcuts(ctx: &Context) -> Vec<Shortcut> {
    ctx.input(|input| {
        let mut shortcuts = Vec::new();
        if !input.modifiers.command {
            return shortcuts;
        }
        if input.key_pressed(Key::Z) {
            shortcuts.push(if input.modifiers.shift {
                Shortcut::Redo
            } else {
                Shortcut::Undo
            });
        }
        if input.key_pressed(Key::Y) {
            shortcuts.push(Shortcut::Redo);
        }
        shortcuts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchpadConfig;
    use crate::element::ElementType;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 100.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn test_press_inside_canvas() {
        let mut handler = InputHandler::new(canvas());
        let events = handler.process(PointerFrame {
            hover_pos: Some(Pos2::new(150.0, 150.0)),
            primary_pressed: true,
            primary_released: false,
        });
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerMove { .. }));
        assert!(matches!(events[1], InputEvent::PointerDown { .. }));
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new(canvas());
        let events = handler.process(PointerFrame {
            hover_pos: Some(Pos2::new(10.0, 10.0)),
            primary_pressed: true,
            primary_released: false,
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_leaving_canvas_emits_leave() {
        let mut handler = InputHandler::new(canvas());
        handler.process(PointerFrame {
            hover_pos: Some(Pos2::new(150.0, 150.0)),
            ..Default::default()
        });
        let events = handler.process(PointerFrame {
            hover_pos: Some(Pos2::new(10.0, 10.0)),
            ..Default::default()
        });
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], InputEvent::PointerLeave { .. }));

        // Leaving the window entirely from outside the canvas still reports a leave.
        let events = handler.process(PointerFrame::default());
        assert!(matches!(events[0], InputEvent::PointerLeave { .. }));
    }

    #[test]
    fn test_dispatch_maps_screen_to_canvas_coordinates() {
        let mut editor = EditorContext::new(SketchpadConfig::default());
        let canvas_rect = Rect::from_min_size(Pos2::new(40.0, 30.0), egui::vec2(768.0, 512.0));
        let transform = CanvasTransform::new(canvas_rect, editor.config().canvas_resolution());
        let location = |position| InputLocation {
            position,
            is_in_canvas: true,
        };

        let events = [
            InputEvent::PointerDown {
                location: location(canvas_rect.center()),
            },
            InputEvent::PointerMove {
                location: location(canvas_rect.max),
            },
            InputEvent::PointerUp {
                location: location(canvas_rect.max),
            },
        ];
        dispatch(&events, &transform, &mut editor);

        let ElementType::Stroke(stroke) = &editor.document().elements()[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(stroke.points(), &[Pos2::new(960.0, 540.0), Pos2::new(1920.0, 1080.0)]);
    }
}
