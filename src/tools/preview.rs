use egui::{Color32, Pos2};

use super::{ToolMode, ToolState};
use crate::element::sticker;
use crate::surface::Surface;

/// Uncommitted hint of where the next action lands.
///
/// Previews are never part of the display list and are never exported.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Pen tip: a dot as wide as the stroke
    Pen {
        center: Pos2,
        thickness: f32,
        color: Color32,
    },
    /// The sticker as it would be placed
    Sticker {
        position: Pos2,
        glyph: String,
        rotation_degrees: f32,
        size: f32,
    },
}

impl Preview {
    /// Build the preview of the active tool at `position`
    pub fn for_tool(tools: &ToolState, position: Pos2, sticker_size: f32) -> Self {
        match tools.mode() {
            ToolMode::Pen => Preview::Pen {
                center: position,
                thickness: tools.pen_thickness(),
                color: tools.pen_color(),
            },
            ToolMode::Sticker {
                glyph,
                rotation_degrees,
            } => Preview::Sticker {
                position,
                glyph: glyph.clone(),
                rotation_degrees: *rotation_degrees,
                size: sticker_size,
            },
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            Preview::Pen { center, .. } => *center,
            Preview::Sticker { position, .. } => *position,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Pen {
                center,
                thickness,
                color,
            } => surface.fill_circle(*center, thickness / 2.0, *color),
            Preview::Sticker {
                position,
                glyph,
                rotation_degrees,
                size,
            } => sticker::draw_glyph(surface, *position, glyph, *rotation_degrees, *size),
        }
    }
}
