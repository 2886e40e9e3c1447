use egui::color_picker::{self, Alpha};

use crate::app::SketchpadApp;
use crate::components::ToolButton;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading(crate::app::APP_NAME);
            ui.separator();

            ui.label("Marker");
            let thin = app.editor.config().thin_thickness;
            let thick = app.editor.config().thick_thickness;
            ui.horizontal(|ui| {
                if ToolButton::new("Thin", app.editor.tools().is_pen_active(thin))
                    .show(ui)
                    .clicked()
                {
                    app.editor.select_pen(thin);
                }
                if ToolButton::new("Thick", app.editor.tools().is_pen_active(thick))
                    .show(ui)
                    .clicked()
                {
                    app.editor.select_pen(thick);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                if color_picker::color_edit_button_srgba(ui, &mut app.pen_color, Alpha::Opaque).changed() {
                    app.editor.select_pen_color(app.pen_color);
                }
            });

            ui.separator();
            ui.label("Stickers");
            let stickers = app.editor.palette().stickers().to_vec();
            ui.horizontal_wrapped(|ui| {
                for (index, sticker) in stickers.iter().enumerate() {
                    let selected = app.editor.tools().is_sticker_active(&sticker.glyph);
                    if ToolButton::new(&sticker.glyph, selected).show(ui).clicked() {
                        app.editor.select_sticker_tool(index);
                    }
                }
            });
            if ui.button("Custom Sticker").clicked() {
                app.open_custom_sticker_prompt();
            }

            ui.separator();
            ui.horizontal(|ui| {
                let can_undo = app.editor.document().can_undo();
                let can_redo = app.editor.document().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.editor.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.editor.redo();
                }
                if ui.button("Clear").clicked() {
                    app.editor.clear();
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!("Items: {}", app.editor.document().len()));
                ui.label(format!("Redo: {}", app.editor.document().redo_stack().len()));
            });

            ui.separator();
            if ui.button("Export").clicked() {
                app.export();
            }
            if let Some(status) = &app.status {
                ui.label(status);
            }
        });
}
