//! Canned preprocessor output, for running discovery without a toolchain

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{PreprocessError, PreprocessOutput, Preprocessor};

/// Returns fixed text per path and records every path it was asked for
#[derive(Debug, Default)]
pub struct FakePreprocessor {
    outputs: HashMap<PathBuf, PreprocessOutput>,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakePreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the preprocessed text produced for `path`
    pub fn with_output(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.outputs.entry(path.into()).or_default().text = text.into();
        self
    }

    /// Register the diagnostics printed for `path`
    pub fn with_diagnostics(mut self, path: impl Into<PathBuf>, diagnostics: impl Into<String>) -> Self {
        self.outputs.entry(path.into()).or_default().diagnostics = diagnostics.into();
        self
    }

    /// Paths preprocessed so far, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl Preprocessor for FakePreprocessor {
    fn run(&self, path: &Path) -> Result<PreprocessOutput, PreprocessError> {
        self.calls.borrow_mut().push(path.to_path_buf());

        self.outputs.get(path).cloned().ok_or_else(|| {
            PreprocessError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no canned output for {}", path.display()),
            ))
        })
    }
}
