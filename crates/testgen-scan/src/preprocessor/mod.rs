//! C Preprocessor Integration
//!
//! Test discovery only ever sees preprocessed text. The [`Preprocessor`]
//! trait is the seam between discovery and the external tool.
//! Only the preprocessed text is scanned for tests; diagnostics are only
//! checked for the fatal-error marker.

pub mod command;
pub mod fake;

pub use command::{CommandPreprocessor, PreprocessOptions};
pub use fake::FakePreprocessor;

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during preprocessing
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PreprocessError> for testgen_core::Error {
    fn from(err: PreprocessError) -> Self {
        testgen_core::Error::Tool(err.to_string())
    }
}

/// What the preprocessor printed for one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessOutput {
    /// Preprocessed source (stdout)
    pub text: String,
    /// Diagnostics (stderr). These quote source lines, so they are never
    /// scanned for tests.
    pub diagnostics: String,
}

impl PreprocessOutput {
    pub fn new(text: impl Into<String>, diagnostics: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            diagnostics: diagnostics.into(),
        }
    }

    /// Whether either stream contains `marker`
    pub fn contains(&self, marker: &str) -> bool {
        self.text.contains(marker) || self.diagnostics.contains(marker)
    }
}

/// Turns a source file into preprocessed text
pub trait Preprocessor {
    fn run(&self, path: &Path) -> Result<PreprocessOutput, PreprocessError>;
}

impl<P: Preprocessor + ?Sized> Preprocessor for &P {
    fn run(&self, path: &Path) -> Result<PreprocessOutput, PreprocessError> {
        (**self).run(path)
    }
}

impl<P: Preprocessor + ?Sized> Preprocessor for Box<P> {
    fn run(&self, path: &Path) -> Result<PreprocessOutput, PreprocessError> {
        (**self).run(path)
    }
}
