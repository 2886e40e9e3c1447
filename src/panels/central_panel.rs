use egui::Sense;

use crate::app::SketchpadApp;
use crate::geometry::CanvasTransform;
use crate::input;

/// The drawing canvas, shown at the configured display size
pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let display_size = app.editor.config().display_size();
        let (response, painter) = ui.allocate_painter(display_size, Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Pointer input is handled before painting so the frame shows its effect.
        if app.custom_sticker_prompt.is_none() {
            app.input.set_canvas_rect(canvas_rect);
            let events = app.input.process_input(ctx);
            let transform = CanvasTransform::new(canvas_rect, app.editor.config().canvas_resolution());
            input::dispatch(&events, &transform, &mut app.editor);
        }

        match &mut app.renderer {
            Some(renderer) => {
                renderer.update(ctx, &app.editor);
                renderer.paint(&painter, canvas_rect);
            }
            None => {
                ui.label("Canvas unavailable, see log for details");
            }
        }

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
