use std::path::PathBuf;

use thiserror::Error;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing input artifact at {}", .0.display())]
    MissingArtifact(PathBuf),
    #[error("Output artifact already exists at {} (delete it to re-run)", .0.display())]
    ArtifactExists(PathBuf),
    #[error("Validation error: {0}")]
    Validation(String),
}
