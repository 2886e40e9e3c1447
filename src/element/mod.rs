use egui::{Color32, Pos2, Rect};
use uuid::Uuid;

use crate::surface::Surface;

mod common;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::{Sticker, STICKER_COLOR};
pub use stroke::{Stroke, StrokeBuilder};

/// Stable identity of a committed element
pub type ElementId = Uuid;

/// Common trait that all drawable elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Get the bounding rectangle for this element in logical coordinates
    fn rect(&self) -> Rect;

    /// Draw the element onto the surface. Any transform changes are undone
    /// before returning.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Enumeration of all element types in the display list
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        match self {
            ElementType::Stroke(s) => s.id(),
            ElementType::Sticker(s) => s.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Stroke(s) => s.element_type(),
            ElementType::Sticker(s) => s.element_type(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementType::Stroke(s) => s.rect(),
            ElementType::Sticker(s) => s.rect(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            ElementType::Stroke(s) => s.draw(surface),
            ElementType::Sticker(s) => s.draw(surface),
        }
    }
}

impl From<Stroke> for ElementType {
    fn from(stroke: Stroke) -> Self {
        ElementType::Stroke(stroke)
    }
}

impl From<Sticker> for ElementType {
    fn from(sticker: Sticker) -> Self {
        ElementType::Sticker(sticker)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// Create a new stroke element
    pub fn create_stroke(points: Vec<Pos2>, thickness: f32, color: Color32) -> ElementType {
        ElementType::Stroke(Stroke::new(points, thickness, color))
    }

    /// Create a new sticker element
    pub fn create_sticker(
        position: Pos2,
        glyph: impl Into<String>,
        rotation_degrees: f32,
        size: f32,
    ) -> ElementType {
        ElementType::Sticker(Sticker::new(position, glyph, rotation_degrees, size))
    }
}
