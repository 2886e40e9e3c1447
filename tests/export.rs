use std::fs;

use egui::{Color32, Pos2};
use sketchpad::config::SketchpadConfig;
use sketchpad::document::Document;
use sketchpad::element::factory;
use sketchpad::error::{ExportError, SurfaceError};
use sketchpad::export::{export_png, render_export, save_export};
use sketchpad::renderer::render_scene;
use sketchpad::state::EditorContext;
use sketchpad::surface::RasterSurface;

fn small_config() -> SketchpadConfig {
    SketchpadConfig {
        canvas_size: [100, 100],
        export_scale: 4.0,
        ..Default::default()
    }
}

fn sample_document() -> Document {
    let mut document = Document::new();
    document.commit(factory::create_stroke(
        vec![Pos2::new(10.0, 10.0), Pos2::new(60.0, 40.0)],
        2.0,
        Color32::BLACK,
    ));
    document.commit(factory::create_sticker(Pos2::new(75.0, 75.0), "A", 0.0, 16.0));
    document
}


#[test]
fn test_export_footprint_is_uniformly_scaled() {
    let config = small_config();
    let document = sample_document();

    let mut live = RasterSurface::new(100, 100).unwrap();
    render_scene(&document, None, None, &mut live);
    let exported = render_export(&document, &config).unwrap();
    assert_eq!((exported.width(), exported.height()), (400, 400));

    let live_bounds = live.painted_bounds(1).unwrap();
    let export_bounds = exported.painted_bounds(1).unwrap();
    for (live, export) in live_bounds.iter().zip(export_bounds) {
        let expected = *live as f32 * 4.0;
        assert!(
            (export as f32 - expected).abs() <= 12.0,
            "live {:?} export {:?}",
            live_bounds,
            export_bounds
        );
    }

    // Painted area grows with the square of the scale.
    let ratio = exported.painted_pixel_count() as f32 / live.painted_pixel_count() as f32;
    assert!(ratio > 6.0 && ratio < 24.0, "area ratio {}", ratio);
}

#[test]
fn test_export_png_decodes() {
    let bytes = export_png(&sample_document(), &small_config()).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (400, 400));
    assert!(image.pixels().any(|p| p.0[3] > 0));
    // Background stays transparent.
    assert_eq!(image.get_pixel(399, 0).0[3], 0);
}

#[test]
fn test_export_skips_preview_and_active_stroke() {
    let mut editor = EditorContext::new(small_config());
    editor.pointer_move(Pos2::new(50.0, 50.0));
    assert!(editor.preview().is_some());
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(90.0, 90.0));

    let bytes = editor.export_png().unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(image.pixels().all(|p| p.0[3] == 0));
    assert!(editor.is_drawing(), "export must not touch the session");
}

#[test]
fn test_save_export_writes_file() {
    let config = small_config();
    let dir = tempfile::tempdir().unwrap();
    let bytes = export_png(&sample_document(), &config).unwrap();

    let path = save_export(&bytes, dir.path(), &config).unwrap();
    assert_eq!(path.file_name().unwrap(), "sketchpad_export.png");
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_empty_export_is_not_saved() {
    let config = small_config();
    let dir = tempfile::tempdir().unwrap();

    let result = save_export(&[], dir.path(), &config);
    assert!(matches!(result, Err(ExportError::EmptyImage)));
    assert!(!dir.path().join(&config.export_file_name).exists());
}

#[test]
fn test_invalid_export_size_is_reported() {
    let config = SketchpadConfig {
        canvas_size: [100, 100],
        export_scale: 0.001,
        ..Default::default()
    };
    let result = export_png(&sample_document(), &config);
    assert!(matches!(
        result,
        Err(ExportError::Surface(SurfaceError::InvalidDimensions { width: 0, height: 0 }))
    ));
}
