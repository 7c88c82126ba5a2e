//! Rendered output files

use std::path::PathBuf;
use testgen_core::Result;
use tracing::info;

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    /// Write the file, replacing any existing contents
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.contents)?;
        info!("Wrote {} ({} bytes)", self.path.display(), self.contents.len());
        Ok(())
    }
}
