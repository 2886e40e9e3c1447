use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::SketchpadConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur when allocating a drawing surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Errors that can occur while exporting the drawing to an image file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("Export produced no image data")]
    EmptyImage,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}
