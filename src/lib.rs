#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod journal;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod session;
pub mod tool;

pub use action::Action;
pub use app::SketchApp;
pub use canvas::{Canvas, Commit, RenderTarget};
pub use config::SketchConfig;
pub use error::{CanvasError, ConfigError, JournalError, SketchError, ToolError};
pub use journal::{ActionJournal, JournalEntry, SessionLabel};
pub use renderer::Renderer;
pub use session::{CanvasSize, Session};
pub use tool::{BrushVariant, PenSize, ShapeMode, ToolProfile, ToolState};
