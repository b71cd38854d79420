use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating config or loading documents
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Failed to load documents: {0}")]
    DocumentLoad(String),

    #[error("Invalid config at {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectError>;
