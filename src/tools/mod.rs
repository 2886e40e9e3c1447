use egui::Color32;

mod palette;
mod preview;
mod rotation;

pub use palette::StickerPalette;
pub use preview::Preview;
pub use rotation::{FixedRotation, RandomRotation, RotationSource};

/// Which kind of action a pointer press performs
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMode {
    /// Freehand drawing
    Pen,
    /// Stamping `glyph`; the rotation is fixed when the sticker is selected
    Sticker { glyph: String, rotation_degrees: f32 },
}

/// The current tool configuration.
///
/// Exactly one mode is active. Pen settings survive while a sticker is
/// selected so switching back to the pen keeps the last thickness and color.
pub struct ToolState {
    mode: ToolMode,
    pen_thickness: f32,
    pen_color: Color32,
    rotation: Box<dyn RotationSource>,
}

impl std::fmt::Debug for ToolState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolState")
            .field("mode", &self.mode)
            .field("pen_thickness", &self.pen_thickness)
            .field("pen_color", &self.pen_color)
            .finish_non_exhaustive()
    }
}

impl ToolState {
    pub fn new(pen_thickness: f32, pen_color: Color32) -> Self {
        Self::with_rotation_source(pen_thickness, pen_color, Box::new(RandomRotation))
    }

    pub fn with_rotation_source(
        pen_thickness: f32,
        pen_color: Color32,
        rotation: Box<dyn RotationSource>,
    ) -> Self {
        Self {
            mode: ToolMode::Pen,
            pen_thickness,
            pen_color,
            rotation,
        }
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn pen_thickness(&self) -> f32 {
        self.pen_thickness
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn sticker_glyph(&self) -> Option<&str> {
        match &self.mode {
            ToolMode::Sticker { glyph, .. } => Some(glyph),
            ToolMode::Pen => None,
        }
    }

    pub fn sticker_rotation(&self) -> Option<f32> {
        match &self.mode {
            ToolMode::Sticker {
                rotation_degrees, ..
            } => Some(*rotation_degrees),
            ToolMode::Pen => None,
        }
    }

    /// Switch to the pen with the given thickness
    pub fn select_pen(&mut self, thickness: f32) {
        log::debug!("Selected pen with thickness {}", thickness);
        self.pen_thickness = thickness;
        self.mode = ToolMode::Pen;
    }

    /// Change the pen color. Does not change the active mode.
    pub fn select_pen_color(&mut self, color: Color32) {
        log::debug!("Selected pen color {}", color.to_hex());
        self.pen_color = color;
    }

    /// Switch to a sticker. A rotating sticker picks its rotation now, once
    /// per selection rather than once per placement.
    pub fn select_sticker(&mut self, glyph: impl Into<String>, rotate: bool) {
        let glyph = glyph.into();
        let rotation_degrees = if rotate {
            self.rotation.next_degrees()
        } else {
            0.0
        };
        log::debug!("Selected sticker {:?} at {} degrees", glyph, rotation_degrees);
        self.mode = ToolMode::Sticker {
            glyph,
            rotation_degrees,
        };
    }

    /// True if the pen is active with this thickness
    pub fn is_pen_active(&self, thickness: f32) -> bool {
        self.mode == ToolMode::Pen && self.pen_thickness == thickness
    }

    /// True if a sticker with this glyph is active
    pub fn is_sticker_active(&self, glyph: &str) -> bool {
        self.sticker_glyph() == Some(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_exclusive() {
        let mut tools = ToolState::with_rotation_source(1.0, Color32::BLACK, Box::new(FixedRotation(90.0)));
        assert!(tools.is_pen_active(1.0));

        tools.select_sticker("🏀", true);
        assert!(!tools.is_pen_active(1.0));
        assert!(tools.is_sticker_active("🏀"));
        assert_eq!(tools.sticker_rotation(), Some(90.0));

        tools.select_pen(5.0);
        assert!(tools.is_pen_active(5.0));
        assert!(!tools.is_pen_active(1.0));
        assert!(!tools.is_sticker_active("🏀"));
    }

    #[test]
    fn test_non_rotating_sticker_is_upright() {
        let mut tools = ToolState::with_rotation_source(1.0, Color32::BLACK, Box::new(FixedRotation(45.0)));
        tools.select_sticker("♻️", false);
        assert_eq!(tools.sticker_rotation(), Some(0.0));
    }

    #[test]
    fn test_color_survives_mode_switch() {
        let mut tools = ToolState::new(1.0, Color32::BLACK);
        tools.select_pen_color(Color32::RED);
        tools.select_sticker("🎸", false);
        assert_eq!(tools.mode(), &ToolMode::Sticker { glyph: "🎸".into(), rotation_degrees: 0.0 });
        tools.select_pen(1.0);
        assert_eq!(tools.pen_color(), Color32::RED);
    }
}
