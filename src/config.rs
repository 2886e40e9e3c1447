use std::fs;
use std::path::Path;

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A sticker tool that is available from the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSpec {
    pub glyph: String,
    /// Whether selecting this sticker picks a random rotation
    pub rotate: bool,
}

impl StickerSpec {
    pub fn new(glyph: impl Into<String>, rotate: bool) -> Self {
        Self {
            glyph: glyph.into(),
            rotate,
        }
    }
}

/// Static configuration for a sketchpad session.
///
/// Every field has a default, so a config file only needs to name the
/// values it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct SketchpadConfig {
    /// Internal pixel resolution of the live canvas
    pub canvas_size: [u32; 2],
    /// On-screen size the canvas is displayed at
    pub display_size: [f32; 2],
    /// Uniform scale applied when exporting
    pub export_scale: f32,
    pub export_file_name: String,
    pub sticker_font_size: f32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    /// `#rrggbb`
    pub default_color: String,
    pub stickers: Vec<StickerSpec>,
    /// Text pre-filled in the custom sticker prompt
    pub custom_sticker_hint: String,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [1920, 1080],
            display_size: [768.0, 512.0],
            export_scale: 2.0,
            export_file_name: "sketchpad_export.png".to_owned(),
            sticker_font_size: 24.0,
            thin_thickness: 1.0,
            thick_thickness: 5.0,
            default_color: "#000000".to_owned(),
            stickers: vec![
                StickerSpec::new("🎸", true),
                StickerSpec::new("😳", true),
                StickerSpec::new("🏀", true),
            ],
            custom_sticker_hint: "♻️".to_owned(),
        }
    }
}

impl SketchpadConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to the defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.canvas_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be non-zero, got {}x{}",
                width, height
            )));
        }

        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
            }
        };
        positive("display_size width", self.display_size[0])?;
        positive("display_size height", self.display_size[1])?;
        positive("export_scale", self.export_scale)?;
        positive("sticker_font_size", self.sticker_font_size)?;
        positive("thin_thickness", self.thin_thickness)?;
        positive("thick_thickness", self.thick_thickness)?;

        if parse_hex_color(&self.default_color).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default_color is not a #rrggbb color: {:?}",
                self.default_color
            )));
        }

        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export_file_name is empty".to_owned()));
        }

        Ok(())
    }

    pub fn canvas_resolution(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }

    pub fn display_size(&self) -> Vec2 {
        Vec2::from(self.display_size)
    }

    /// Pixel size of the exported image
    pub fn export_size(&self) -> [u32; 2] {
        let scale = |v: u32| (v as f32 * self.export_scale).round() as u32;
        [scale(self.canvas_size[0]), scale(self.canvas_size[1])]
    }

    pub fn default_pen_color(&self) -> Color32 {
        parse_hex_color(&self.default_color).unwrap_or(Color32::BLACK)
    }
}

/// Parse `#rrggbb` (or `#rrggbbaa`) text as a color input would produce it
pub fn parse_hex_color(text: &str) -> Option<Color32> {
    Color32::from_hex(text.trim()).ok()
}
