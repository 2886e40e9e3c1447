use egui::{Pos2, Rect, Vec2};

/// Maps between on-screen pointer positions and logical canvas coordinates.
///
/// The canvas keeps an internal pixel buffer (`resolution`) that may be
/// displayed at a different size (`bounds`). Logical coordinates always
/// live in the internal buffer's space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Where the canvas is shown on screen
    pub bounds: Rect,
    /// Internal pixel resolution of the canvas
    pub resolution: Vec2,
}

impl CanvasTransform {
    pub fn new(bounds: Rect, resolution: Vec2) -> Self {
        Self { bounds, resolution }
    }

    /// Ratio of internal resolution to displayed size, per axis.
    ///
    /// A degenerate (zero sized) display axis maps 1:1.
    pub fn scale(&self) -> Vec2 {
        let ratio = |internal: f32, displayed: f32| {
            if displayed > 0.0 { internal / displayed } else { 1.0 }
        };
        Vec2::new(
            ratio(self.resolution.x, self.bounds.width()),
            ratio(self.resolution.y, self.bounds.height()),
        )
    }

    /// Convert a screen position into logical canvas coordinates
    pub fn to_logical(&self, screen: Pos2) -> Pos2 {
        let scale = self.scale();
        let offset = screen - self.bounds.min;
        Pos2::new(offset.x * scale.x, offset.y * scale.y)
    }

    /// Convert logical canvas coordinates back to a screen position
    pub fn to_screen(&self, logical: Pos2) -> Pos2 {
        let scale = self.scale();
        self.bounds.min + Vec2::new(logical.x / scale.x, logical.y / scale.y)
    }
}

/// `logical = (client - origin) * (resolution / displayed_size)`
pub fn pointer_to_canvas(client: Pos2, bounds: Rect, resolution: Vec2) -> Pos2 {
    CanvasTransform::new(bounds, resolution).to_logical(client)
}
