use egui::{Color32, Pos2, Rect, TextureHandle, TextureOptions};

use crate::document::Document;
use crate::element::StrokeBuilder;
use crate::error::SurfaceError;
use crate::event::RepaintFlag;
use crate::state::EditorContext;
use crate::surface::{RasterSurface, Surface};
use crate::tools::Preview;

/// Repaint everything from scratch.
///
/// Committed elements are painted in order, then the stroke being drawn.
/// The preview is only painted when no stroke is in progress.
pub fn render_scene(
    document: &Document,
    active_stroke: Option<&StrokeBuilder>,
    preview: Option<&Preview>,
    surface: &mut dyn Surface,
) {
    surface.clear();
    document.draw(surface);

    match active_stroke {
        Some(stroke) => stroke.draw(surface),
        None => {
            if let Some(preview) = preview {
                preview.draw(surface);
            }
        }
    }
}

/// Keeps the live canvas: a raster surface at the canvas' internal
/// resolution, uploaded to an egui texture whenever the editor changes.
pub struct CanvasRenderer {
    surface: RasterSurface,
    texture: Option<TextureHandle>,
    repaint: RepaintFlag,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("surface", &self.surface)
            .field("has_texture", &self.texture.is_some())
            .field("repaint", &self.repaint.is_raised())
            .finish()
    }
}

impl CanvasRenderer {
    /// Creates a renderer and subscribes it to the editor's change notifications
    pub fn new(editor: &EditorContext) -> Result<Self, SurfaceError> {
        let [width, height] = editor.config().canvas_size;
        let surface = RasterSurface::new(width, height)?;
        let repaint = RepaintFlag::new();
        editor.subscribe(Box::new(repaint.clone()));
        // Nothing has been drawn yet.
        repaint.raise();

        Ok(Self {
            surface,
            texture: None,
            repaint,
        })
    }

    /// Repaint the surface if the editor changed since the last frame
    pub fn update(&mut self, ctx: &egui::Context, editor: &EditorContext) {
        if !self.repaint.take() && self.texture.is_some() {
            return;
        }

        editor.render(&mut self.surface);
        let image = self.surface.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("sketchpad-canvas", image, TextureOptions::LINEAR));
            }
        }
    }

    /// Paint the canvas texture into `rect` on a white backing
    pub fn paint(&self, painter: &egui::Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_preview_hidden_while_drawing() {
        let document = Document::new();
        let stroke = StrokeBuilder::new(Pos2::new(0.0, 0.0), 2.0, Color32::BLACK);
        let preview = Preview::Pen {
            center: Pos2::new(5.0, 5.0),
            thickness: 2.0,
            color: Color32::BLACK,
        };

        let mut surface = RecordingSurface::new();
        render_scene(&document, Some(&stroke), Some(&preview), &mut surface);
        assert_eq!(surface.ops(), vec![&DrawOp::Clear]);

        let mut surface = RecordingSurface::new();
        render_scene(&document, None, Some(&preview), &mut surface);
        assert_eq!(surface.ops().len(), 2);
        assert!(matches!(surface.ops()[1], DrawOp::Circle { radius, .. } if *radius == 1.0));
    }

    #[test]
    fn test_scene_paints_in_commit_order() {
        let mut document = Document::new();
        document.commit(factory::create_stroke(
            vec![Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)],
            1.0,
            Color32::RED,
        ));
        document.commit(factory::create_sticker(Pos2::new(3.0, 3.0), "A", 0.0, 24.0));

        let mut surface = RecordingSurface::new();
        render_scene(&document, None, None, &mut surface);
        let ops = surface.ops();
        assert!(matches!(ops[0], DrawOp::Clear));
        assert!(matches!(ops[1], DrawOp::Polyline { .. }));
        assert!(matches!(ops[2], DrawOp::Glyph { .. }));
    }
}
