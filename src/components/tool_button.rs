use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2};

/// A square toolbar button that stays highlighted while its tool is active
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let font_id = FontId::proportional(20.0);
        let text_width = ui
            .fonts(|fonts| fonts.layout_no_wrap(self.label.to_owned(), font_id.clone(), Color32::WHITE))
            .size()
            .x;
        let button_size = Vec2::new((text_width + 16.0).max(36.0), 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                Color32::from_gray(70)
            } else {
                Color32::from_gray(50)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                Color32::BLACK
            } else {
                Color32::WHITE
            };
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::from_rgb(33, 150, 243)));
            }
        }

        response
    }
}
