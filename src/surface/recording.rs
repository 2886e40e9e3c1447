use egui::{Color32, Pos2};
use tiny_skia::Transform;

use super::Surface;

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Polyline {
        points: Vec<Pos2>,
        thickness: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        size: f32,
        color: Color32,
    },
}

/// A drawing call together with the transform it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub op: DrawOp,
    /// Where the local origin landed on the surface
    pub origin: Pos2,
    /// Accumulated rotation in radians
    pub rotation: f32,
    /// Number of unmatched `save` calls at the time of the draw
    pub depth: usize,
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Handy to check paint order and transform scoping without comparing pixels.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded operations without their transforms
    pub fn ops(&self) -> Vec<&DrawOp> {
        self.calls.iter().map(|call| &call.op).collect()
    }

    /// Current save depth
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// True if the current transform is the identity
    pub fn is_identity(&self) -> bool {
        self.transform.is_identity()
    }

    fn record(&mut self, op: DrawOp) {
        let t = self.transform;
        self.calls.push(DrawCall {
            op,
            origin: Pos2::new(t.tx, t.ty),
            rotation: t.ky.atan2(t.sx),
            depth: self.saved.len(),
        });
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.record(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform.pre_rotate(radians.to_degrees());
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        self.record(DrawOp::Polyline {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.record(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_glyph(&mut self, text: &str, size: f32, color: Color32) {
        self.record(DrawOp::Glyph {
            text: text.to_owned(),
            size,
            color,
        });
    }
}
