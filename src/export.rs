//! High-resolution PNG export.
//!
//! The committed drawing is rendered onto an offscreen surface sized
//! `canvas_size * export_scale`, with the same uniform scale applied to the
//! drawing so every element keeps its place relative to the canvas.
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{info, warn};

use crate::config::SketchpadConfig;
use crate::document::Document;
use crate::error::ExportError;
use crate::surface::{RasterSurface, Surface};

/// Render the committed elements at export resolution.
///
/// Previews and unsealed strokes are not part of the document and so never
/// appear in an export.
pub fn render_export(document: &Document, config: &SketchpadConfig) -> Result<RasterSurface, ExportError> {
    let [width, height] = config.export_size();
    let mut surface = RasterSurface::new(width, height)?;
    surface.clear();
    surface.scale(config.export_scale, config.export_scale);
    document.draw(&mut surface);
    Ok(surface)
}

/// Render and encode the document as PNG bytes
pub fn export_png(document: &Document, config: &SketchpadConfig) -> Result<Vec<u8>, ExportError> {
    let surface = render_export(document, config)?;
    let image = surface.to_rgba_image().ok_or(ExportError::EmptyImage)?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    if bytes.is_empty() {
        return Err(ExportError::EmptyImage);
    }

    info!(
        "Exported {} elements at {}x{} ({} bytes)",
        document.len(),
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Write exported bytes to `dir`, named after the configured export file name.
///
/// Empty data is refused so a failed export never leaves a broken file behind.
pub fn save_export(bytes: &[u8], dir: impl AsRef<Path>, config: &SketchpadConfig) -> Result<PathBuf, ExportError> {
    if bytes.is_empty() {
        warn!("Skipping export: no image data");
        return Err(ExportError::EmptyImage);
    }

    let path = dir.as_ref().join(&config.export_file_name);
    fs::write(&path, bytes)?;
    info!("Saved export to {}", path.display());
    Ok(path)
}
