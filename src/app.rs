use std::path::PathBuf;

use egui::{Color32, Rect};

use crate::config::SketchpadConfig;
use crate::export;
use crate::input::{self, InputHandler, Shortcut};
use crate::panels;
use crate::renderer::CanvasRenderer;
use crate::state::EditorContext;

pub const APP_NAME: &str = "Pixel Paint Palette";

/// The eframe application: tool buttons on the left, the canvas in the middle.
pub struct SketchpadApp {
    pub(crate) editor: EditorContext,
    pub(crate) renderer: Option<CanvasRenderer>,
    pub(crate) input: InputHandler,
    /// Value shown by the color picker
    pub(crate) pen_color: Color32,
    /// Text of the custom sticker prompt while it is open
    pub(crate) custom_sticker_prompt: Option<String>,
    /// Outcome of the last export
    pub(crate) status: Option<String>,
    /// Where exports are written
    pub(crate) export_dir: PathBuf,
}

impl std::fmt::Debug for SketchpadApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SketchpadApp")
            .field("editor", &self.editor)
            .field("renderer", &self.renderer)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: SketchpadConfig) -> Self {
        let pen_color = config.default_pen_color();
        let editor = EditorContext::new(config);
        let renderer = match CanvasRenderer::new(&editor) {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                log::error!("Canvas unavailable: {}", err);
                None
            }
        };

        Self {
            editor,
            renderer,
            input: InputHandler::new(Rect::NOTHING),
            pen_color,
            custom_sticker_prompt: None,
            status: None,
            export_dir: PathBuf::from("."),
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    /// Export the drawing and save it next to the working directory
    pub fn export(&mut self) {
        let result = self
            .editor
            .export_png()
            .and_then(|bytes| export::save_export(&bytes, &self.export_dir, self.editor.config()));

        self.status = Some(match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::warn!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
    }

    /// Open the custom sticker prompt pre-filled with the configured hint
    pub fn open_custom_sticker_prompt(&mut self) {
        self.custom_sticker_prompt = Some(self.editor.config().custom_sticker_hint.clone());
    }

    /// Accept the prompt's text; empty text registers nothing
    pub fn submit_custom_sticker(&mut self) {
        if let Some(text) = self.custom_sticker_prompt.take() {
            self.editor.register_custom_sticker(&text);
        }
    }

    fn custom_sticker_window(&mut self, ctx: &egui::Context) {
        let Some(text) = &mut self.custom_sticker_prompt else {
            return;
        };

        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Enter your custom sticker:");
                let response = ui.text_edit_singleline(text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.horizontal(|ui| {
                    submit |= ui.button("OK").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });

        if cancel {
            self.custom_sticker_prompt = None;
        } else if submit {
            self.submit_custom_sticker();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.custom_sticker_prompt.is_none() {
            for shortcut in input::shortcuts(ctx) {
                match shortcut {
                    Shortcut::Undo => self.editor.undo(),
                    Shortcut::Redo => self.editor.redo(),
                }
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.custom_sticker_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_prompt_registers_nothing() {
        let mut app = SketchpadApp::from_config(SketchpadConfig::default());
        let before = app.editor().palette().len();

        app.open_custom_sticker_prompt();
        app.custom_sticker_prompt = Some(String::new());
        app.submit_custom_sticker();
        assert_eq!(app.editor().palette().len(), before);

        app.open_custom_sticker_prompt();
        app.submit_custom_sticker();
        assert_eq!(app.editor().palette().len(), before + 1);
        assert_eq!(app.editor().palette().stickers()[before].glyph, "♻️");
    }
}
