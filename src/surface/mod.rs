use egui::{Color32, Pos2};

mod raster;
mod recording;

pub use raster::RasterSurface;
pub use recording::{DrawCall, DrawOp, RecordingSurface};

/// A 2D drawing target with a scoped transform stack.
///
/// Coordinates passed to the drawing calls are interpreted in the current
/// transform. `save`/`restore` bracket transform changes so they never leak
/// into later draws.
pub trait Surface {
    /// Erase everything on the surface
    fn clear(&mut self);

    /// Push the current transform
    fn save(&mut self);

    /// Pop back to the last saved transform. Unbalanced calls are ignored.
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    fn rotate(&mut self, radians: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    /// Trace a polyline through `points`
    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` centered on the current origin
    fn fill_glyph(&mut self, text: &str, size: f32, color: Color32);
}
