//! Pointer session state of the editor.
//!
//! ```text
//!            pointer-down (pen)
//!   ┌──────┐ ───────────────────► ┌─────────┐
//!   │ Idle │                      │ Drawing │ ◄── pointer-move appends
//!   └──────┘ ◄─────────────────── └─────────┘
//!      ▲     pointer-up / leave
//!      │     (stroke sealed and committed)
//!      └── pointer-down (sticker) commits a sticker and stays Idle
//! ```
use crate::element::StrokeBuilder;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    /// No pointer session in progress
    #[default]
    Idle,
    /// A pen stroke is being drawn
    Drawing { stroke: StrokeBuilder },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The unsealed stroke, if drawing
    pub fn active_stroke(&self) -> Option<&StrokeBuilder> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    pub fn active_stroke_mut(&mut self) -> Option<&mut StrokeBuilder> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    /// Return to idle, handing back the stroke that was being drawn
    pub fn finish(&mut self) -> Option<StrokeBuilder> {
        match std::mem::take(self) {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }
}
