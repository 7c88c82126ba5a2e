//! Error types for testgen

use std::path::PathBuf;
use thiserror::Error;

/// testgen error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The preprocessor reported a fatal error for this input
    #[error("could not find {}", .path.display())]
    Preprocess { path: PathBuf },

    #[error("Preprocessor error: {0}")]
    Tool(String),

    #[error("no source files given")]
    NoInputs,
}

/// Result type alias for testgen
pub type Result<T> = std::result::Result<T, Error>;
