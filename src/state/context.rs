//! The editing session.
//!
//! `EditorContext` owns everything that changes while the user draws: the
//! document, the tool state, the preview and the pointer state machine.
//! UI code drives it through the operations below and repaints whenever an
//! [`EditorEvent::StateChanged`] is emitted.
//!
//! ```rust
//! use egui::Pos2;
//! use sketchpad::config::SketchpadConfig;
//! use sketchpad::state::EditorContext;
//!
//! let mut editor = EditorContext::new(SketchpadConfig::default());
//! editor.pointer_down(Pos2::new(10.0, 10.0));
//! editor.pointer_move(Pos2::new(20.0, 20.0));
//! editor.pointer_up();
//! assert_eq!(editor.document().len(), 1);
//!
//! editor.undo();
//! assert!(editor.document().is_empty());
//! ```
use egui::{Color32, Pos2};
use log::debug;

use super::EditorState;
use crate::config::SketchpadConfig;
use crate::document::Document;
use crate::element::{ElementType, Sticker, StrokeBuilder};
use crate::error::ExportError;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::export;
use crate::renderer;
use crate::surface::Surface;
use crate::tools::{Preview, StickerPalette, ToolMode, ToolState};

/// The main context for the sketchpad editor.
#[derive(Debug)]
pub struct EditorContext {
    config: SketchpadConfig,
    document: Document,
    tools: ToolState,
    palette: StickerPalette,
    preview: Option<Preview>,
    state: EditorState,
    event_bus: EventBus,
}

impl EditorContext {
    /// Create a session with the pen selected at the thin preset
    pub fn new(config: SketchpadConfig) -> Self {
        let tools = ToolState::new(config.thin_thickness, config.default_pen_color());
        Self::with_tools(config, tools)
    }

    /// Create a session with a custom tool state, e.g. one with a fixed rotation source
    pub fn with_tools(config: SketchpadConfig, tools: ToolState) -> Self {
        let palette = StickerPalette::new(config.stickers.clone());
        Self {
            config,
            document: Document::new(),
            tools,
            palette,
            preview: None,
            state: EditorState::Idle,
            event_bus: EventBus::new(),
        }
    }

    /// Register a listener for state change notifications
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    fn notify(&self) {
        self.event_bus.emit(EditorEvent::StateChanged);
    }

    // Pointer input, in logical canvas coordinates.

    /// Start a stroke, or stamp the active sticker
    pub fn pointer_down(&mut self, pos: Pos2) {
        // A missed pointer-up must not lose the previous stroke.
        self.seal_stroke();
        self.preview = None;

        match self.tools.mode() {
            ToolMode::Pen => {
                debug!("Stroke started at {:?}", pos);
                self.state = EditorState::Drawing {
                    stroke: StrokeBuilder::new(
                        pos,
                        self.tools.pen_thickness(),
                        self.tools.pen_color(),
                    ),
                };
            }
            ToolMode::Sticker {
                glyph,
                rotation_degrees,
            } => {
                let sticker = Sticker::new(
                    pos,
                    glyph.clone(),
                    *rotation_degrees,
                    self.config.sticker_font_size,
                );
                self.document.commit(sticker);
            }
        }
        self.notify();
    }

    /// Extend the active stroke, or move the preview when idle
    pub fn pointer_move(&mut self, pos: Pos2) {
        match self.state.active_stroke_mut() {
            Some(stroke) => stroke.add_point(pos),
            None => {
                self.preview = Some(Preview::for_tool(
                    &self.tools,
                    pos,
                    self.config.sticker_font_size,
                ));
            }
        }
        self.notify();
    }

    /// Seal the active stroke
    pub fn pointer_up(&mut self) {
        if self.seal_stroke() {
            self.notify();
        }
    }

    /// Seal the active stroke and hide the preview
    pub fn pointer_leave(&mut self) {
        let sealed = self.seal_stroke();
        let had_preview = self.preview.take().is_some();
        if sealed || had_preview {
            self.notify();
        }
    }

    fn seal_stroke(&mut self) -> bool {
        match self.state.finish() {
            Some(stroke) => {
                debug!("Stroke sealed with {} points", stroke.points().len());
                self.document.commit(stroke.seal());
                true
            }
            None => false,
        }
    }

    // Tool selection.

    pub fn select_pen(&mut self, thickness: f32) {
        self.tools.select_pen(thickness);
        self.preview = None;
        self.notify();
    }

    pub fn select_pen_color(&mut self, color: Color32) {
        self.tools.select_pen_color(color);
        self.preview = None;
        self.notify();
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>, rotate: bool) {
        self.tools.select_sticker(glyph, rotate);
        self.preview = None;
        self.notify();
    }

    /// Select the sticker at `index` in the palette. Returns false for an unknown index.
    pub fn select_sticker_tool(&mut self, index: usize) -> bool {
        let Some(sticker) = self.palette.get(index).cloned() else {
            return false;
        };
        self.select_sticker(sticker.glyph, sticker.rotate);
        true
    }

    /// Add a custom sticker to the palette. Empty input is ignored.
    pub fn register_custom_sticker(&mut self, glyph: &str) -> Option<usize> {
        let index = self.palette.register_custom(glyph)?;
        self.notify();
        Some(index)
    }

    // Display list and history.

    pub fn commit(&mut self, element: impl Into<ElementType>) {
        self.document.commit(element);
        self.preview = None;
        self.notify();
    }

    pub fn undo(&mut self) {
        self.document.undo();
        self.notify();
    }

    pub fn redo(&mut self) {
        self.document.redo();
        self.notify();
    }

    pub fn clear(&mut self) {
        self.document.clear();
        self.notify();
    }

    // Output.

    /// Repaint the whole scene onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::render_scene(
            &self.document,
            self.state.active_stroke(),
            self.preview.as_ref(),
            surface,
        );
    }

    /// Render the committed drawing at export resolution and encode it as PNG
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::export_png(&self.document, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RepaintFlag;

    #[test]
    fn test_every_edit_notifies() {
        let mut editor = EditorContext::new(SketchpadConfig::default());
        let flag = RepaintFlag::new();
        editor.subscribe(Box::new(flag.clone()));

        editor.pointer_move(Pos2::new(1.0, 1.0));
        assert!(flag.take());
        editor.pointer_down(Pos2::new(1.0, 1.0));
        assert!(flag.take());
        editor.pointer_up();
        assert!(flag.take());
        editor.undo();
        assert!(flag.take());
        editor.redo();
        assert!(flag.take());
        editor.clear();
        assert!(flag.take());
        editor.select_pen(5.0);
        assert!(flag.take());
    }

    #[test]
    fn test_pointer_up_when_idle_is_silent() {
        let mut editor = EditorContext::new(SketchpadConfig::default());
        let flag = RepaintFlag::new();
        editor.subscribe(Box::new(flag.clone()));

        editor.pointer_up();
        assert!(!flag.is_raised());
    }
}
