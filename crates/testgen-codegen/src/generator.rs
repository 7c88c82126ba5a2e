//! Harness generation pipeline
//!
//! Every source is scanned before anything is rendered, so a source the
//! preprocessor cannot expand leaves the filesystem untouched.

use std::path::{Path, PathBuf};
use testgen_core::{Config, Error, IdMap, Result};
use testgen_scan::{Extractor, Preprocessor};
use tracing::info;

use crate::entry::entry_file;
use crate::generated::GeneratedFile;
use crate::header::header_file;
use crate::naming::header_name;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Files written, headers first, entry point last
    pub written: Vec<PathBuf>,
    /// Number of sources scanned
    pub sources: usize,
    /// Number of tests registered
    pub tests: usize,
}

/// Scans sources and writes their headers and the entry point
pub struct Generator<P> {
    config: Config,
    extractor: Extractor<P>,
}

impl<P: Preprocessor> Generator<P> {
    pub fn new(config: Config, preprocessor: P) -> Result<Self> {
        let extractor = Extractor::from_config(preprocessor, &config)?;
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extractor(&self) -> &Extractor<P> {
        &self.extractor
    }

    /// Discover the tests in every source, in order
    pub fn scan<S: AsRef<Path>>(&self, sources: &[S]) -> Result<IdMap> {
        if sources.is_empty() {
            return Err(Error::NoInputs);
        }
        self.extractor.extract_all(sources)
    }

    /// Render every output for `map` without touching the filesystem:
    /// one header per entry, then the entry point
    pub fn plan(&self, map: &IdMap) -> Vec<GeneratedFile> {
        let output = &self.config.output;
        let ext = &output.header_extension;

        let mut files = Vec::with_capacity(map.len() + 1);
        let mut header_names = Vec::with_capacity(map.len());

        for source in map {
            files.push(header_file(&source.path, &source.tests, output));
            header_names.push(header_name(&source.path, ext));
        }

        if let Some(first) = map.first_path() {
            files.push(entry_file(first, map, &header_names, output));
        }

        files
    }

    /// Write planned files in order. Files written before a failure stay.
    pub fn write(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            file.write()?;
            written.push(file.path.clone());
        }
        Ok(written)
    }

    /// Scan `sources` and write all generated files
    pub fn run<S: AsRef<Path>>(&self, sources: &[S]) -> Result<Report> {
        let map = self.scan(sources)?;
        let files = self.plan(&map);
        let written = self.write(&files)?;

        info!(
            "Generated {} files for {} tests in {} sources",
            written.len(),
            map.total_tests(),
            map.len()
        );

        Ok(Report {
            written,
            sources: map.len(),
            tests: map.total_tests(),
        })
    }
}
