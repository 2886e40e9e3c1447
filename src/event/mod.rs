use std::cell::Cell;
use std::rc::Rc;

mod bus;
mod events;

pub use bus::EventBus;
pub use events::EditorEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// Shared flag raised by every [`EditorEvent`]; the canvas renderer takes it
/// to decide whether to repaint.
#[derive(Debug, Clone, Default)]
pub struct RepaintFlag(Rc<Cell<bool>>);

impl RepaintFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    /// Lower the flag, returning whether it was raised
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl EventHandler for RepaintFlag {
    fn handle_event(&mut self, _event: &EditorEvent) {
        self.raise();
    }
}
