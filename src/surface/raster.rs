use egui::{Color32, ColorImage, Pos2};
use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    PremultipliedColorU8, Transform,
};

use super::Surface;
use crate::error::SurfaceError;
use crate::glyph;

/// CPU surface backed by a `tiny-skia` pixmap.
///
/// Used both for the live canvas (uploaded to an egui texture) and for the
/// offscreen export buffer.
pub struct RasterSurface {
    pixmap: Pixmap,
    transform: Transform,
    saved: Vec<Transform>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("transform", &self.transform)
            .field("saved", &self.saved.len())
            .finish()
    }
}

impl RasterSurface {
    /// Allocate a transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            saved: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Unpremultiplied color of a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            pixel.red(),
            pixel.green(),
            pixel.blue(),
            pixel.alpha(),
        ))
    }

    /// Number of pixels that are not fully transparent
    pub fn painted_pixel_count(&self) -> usize {
        self.pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }

    /// Smallest `[min_x, min_y, max_x, max_y]` box (inclusive) holding every
    /// pixel with at least `min_alpha` coverage
    pub fn painted_bounds(&self, min_alpha: u8) -> Option<[u32; 4]> {
        let width = self.pixmap.width();
        let mut bounds: Option<[u32; 4]> = None;
        for (index, pixel) in self.pixmap.pixels().iter().enumerate() {
            if pixel.alpha() < min_alpha.max(1) {
                continue;
            }
            let x = index as u32 % width;
            let y = index as u32 / width;
            bounds = Some(match bounds {
                None => [x, y, x, y],
                Some([x0, y0, x1, y1]) => [x0.min(x), y0.min(y), x1.max(x), y1.max(y)],
            });
        }
        bounds
    }

    /// Premultiplied pixels ready to upload as an egui texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_premultiplied(
            [self.pixmap.width() as usize, self.pixmap.height() as usize],
            self.pixmap.data(),
        )
    }

    /// Unpremultiplied copy for encoding
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let bytes: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.pixmap.width(), self.pixmap.height(), bytes)
    }

    /// Uniform scale of the current transform
    fn transform_scale(&self) -> f32 {
        let t = self.transform;
        (t.sx * t.sy - t.kx * t.ky).abs().sqrt()
    }

    fn paint(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
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
        // tiny-skia takes degrees
        self.transform = self.transform.pre_rotate(radians.to_degrees());
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = tiny_skia::Stroke {
            width: thickness,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, self.transform, None);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            self.transform,
            None,
        );
    }

    fn fill_glyph(&mut self, text: &str, size: f32, color: Color32) {
        // Rasterize at device resolution so scaled exports stay crisp.
        let scale = self.transform_scale();
        if scale <= f32::EPSILON {
            return;
        }
        let Some(bitmap) = glyph::rasterize(text, size * scale) else {
            return;
        };
        let Some(mut mask) = Pixmap::new(bitmap.width, bitmap.height) else {
            return;
        };

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        for (pixel, coverage) in mask.pixels_mut().iter_mut().zip(&bitmap.coverage) {
            let alpha = (coverage * a as f32).round() as u32;
            let premultiply = |channel: u8| (channel as u32 * alpha / 255) as u8;
            if let Some(value) = PremultipliedColorU8::from_rgba(
                premultiply(r),
                premultiply(g),
                premultiply(b),
                alpha as u8,
            ) {
                *pixel = value;
            }
        }

        let transform = self
            .transform
            .pre_scale(1.0 / scale, 1.0 / scale)
            .pre_translate(-(bitmap.width as f32) / 2.0, -(bitmap.height as f32) / 2.0);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, mask.as_ref(), &paint, transform, None);
    }
}
