use egui::{Color32, Pos2, Rect, Vec2};

use super::{Element, ElementId};
use crate::surface::Surface;

/// Stickers are always drawn in black, like text on a canvas.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// A glyph stamped onto the canvas at a fixed position and rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: ElementId,
    position: Pos2,
    glyph: String,
    rotation_degrees: f32,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, rotation_degrees: f32, size: f32) -> Self {
        Self {
            id: ElementId::new_v4(),
            position,
            glyph: glyph.into(),
            rotation_degrees,
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Font size of the glyph in logical pixels
    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Element for Sticker {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "sticker"
    }

    fn rect(&self) -> Rect {
        // Covers the glyph box at any rotation.
        let extent = self.size * self.glyph.chars().count().max(1) as f32;
        Rect::from_center_size(self.position, Vec2::splat(extent * std::f32::consts::SQRT_2))
    }

    fn draw(&self, surface: &mut dyn Surface) {
        draw_glyph(surface, self.position, &self.glyph, self.rotation_degrees, self.size);
    }
}

/// Draw `glyph` centered at `position`, rotated around its center.
///
/// The transform change is scoped to this call.
pub(crate) fn draw_glyph(
    surface: &mut dyn Surface,
    position: Pos2,
    glyph: &str,
    rotation_degrees: f32,
    size: f32,
) {
    surface.save();
    surface.translate(position.x, position.y);
    surface.rotate(rotation_degrees.to_radians());
    surface.fill_glyph(glyph, size, STICKER_COLOR);
    surface.restore();
}
