use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the canvas engine
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid canvas dimension: {0}")]
    InvalidDimension(String),

    #[error("Failed to decode image {path}: {source}")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    EncodeError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors raised when a tool setting is rejected
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid tool value: {0}")]
    InvalidToolValue(String),
}

/// Errors raised by the action journal
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Journal storage error: {0}")]
    StorageError(#[from] rusqlite::Error),

    #[error("Journal directory {path} is unavailable: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(#[from] ToolError),
}

/// Any error a session operation can surface to the presentation layer
#[derive(Debug, Error)]
pub enum SketchError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
pub type JournalResult<T> = Result<T, JournalError>;
pub type SketchResult<T> = Result<T, SketchError>;
