//! Glyph rasterization for stickers.
//!
//! Fonts come from egui's bundled default fonts so that exported images
//! look the same as the live canvas without touching system fonts.

use std::sync::OnceLock;

use rusttype::{point, Font, PositionedGlyph, Scale};

/// Fonts tried in order for every character. The emoji font comes first
/// since stickers are usually emoji.
const FONT_PRIORITY: [&str; 4] = ["NotoEmoji-Regular", "Ubuntu-Light", "emoji-icon-font", "Hack"];

fn fonts() -> &'static [Font<'static>] {
    static FONTS: OnceLock<Vec<Font<'static>>> = OnceLock::new();
    FONTS.get_or_init(|| {
        let definitions = egui::FontDefinitions::default();
        FONT_PRIORITY
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(*name)?;
                let font = Font::try_from_vec(data.font.to_vec());
                if font.is_none() {
                    log::warn!("Bundled font {} could not be parsed", name);
                }
                font
            })
            .collect()
    })
}

/// Coverage mask of a laid out string, cropped to its ink.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major coverage in `0.0..=1.0`
    pub coverage: Vec<f32>,
}

/// Lay out `text` on a single line at `px` pixels and rasterize it.
///
/// Characters no bundled font can draw are skipped. Returns `None` when
/// nothing visible remains.
pub fn rasterize(text: &str, px: f32) -> Option<GlyphBitmap> {
    if !(px.is_finite() && px > 0.0) {
        return None;
    }

    let fonts = fonts();
    let scale = Scale::uniform(px);
    let mut caret = 0.0;
    let mut glyphs: Vec<PositionedGlyph<'static>> = Vec::new();

    for c in text.chars() {
        let Some(font) = fonts.iter().find(|font| font.glyph(c).id().0 != 0) else {
            continue;
        };
        let glyph = font.glyph(c).scaled(scale);
        let advance = glyph.h_metrics().advance_width;
        glyphs.push(glyph.positioned(point(caret, 0.0)));
        caret += advance;
    }

    let boxes: Vec<_> = glyphs
        .iter()
        .filter_map(|glyph| glyph.pixel_bounding_box().map(|bb| (glyph, bb)))
        .collect();
    let min_x = boxes.iter().map(|(_, bb)| bb.min.x).min()?;
    let min_y = boxes.iter().map(|(_, bb)| bb.min.y).min()?;
    let max_x = boxes.iter().map(|(_, bb)| bb.max.x).max()?;
    let max_y = boxes.iter().map(|(_, bb)| bb.max.y).max()?;

    let width = (max_x - min_x) as u32;
    let height = (max_y - min_y) as u32;
    if width == 0 || height == 0 {
        return None;
    }

    let mut coverage = vec![0.0f32; (width * height) as usize];
    for (glyph, bb) in boxes {
        let left = (bb.min.x - min_x) as u32;
        let top = (bb.min.y - min_y) as u32;
        glyph.draw(|x, y, v| {
            let index = ((top + y) * width + left + x) as usize;
            if let Some(cell) = coverage.get_mut(index) {
                *cell = cell.max(v.clamp(0.0, 1.0));
            }
        });
    }

    Some(GlyphBitmap {
        width,
        height,
        coverage,
    })
}
