#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod glyph;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use config::SketchpadConfig;
pub use document::Document;
pub use element::{Element, ElementType, Sticker, Stroke};
pub use state::{EditorContext, EditorState};
pub use surface::{RasterSurface, Surface};
pub use tools::{Preview, ToolMode, ToolState};
