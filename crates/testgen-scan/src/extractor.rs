//! Test discovery
//!
//! Runs each source through the preprocessor and collects the names of the
//! test functions defined in the output.

use std::path::Path;
use testgen_core::{Config, Error, IdMap, Result};
use tracing::{debug, info};

use crate::pattern::TestSignature;
use crate::preprocessor::{PreprocessError, Preprocessor};

/// Discovers tests in preprocessed sources
pub struct Extractor<P> {
    preprocessor: P,
    signature: TestSignature,
    fatal_marker: String,
}

impl<P: Preprocessor> Extractor<P> {
    pub fn new(preprocessor: P, signature: TestSignature, fatal_marker: impl Into<String>) -> Self {
        Self {
            preprocessor,
            signature,
            fatal_marker: fatal_marker.into(),
        }
    }

    /// Create an extractor using the pattern and marker from `config`
    pub fn from_config(preprocessor: P, config: &Config) -> Result<Self> {
        let marker = &config.preprocessor.fatal_marker;
        // an empty marker is contained in every output
        if marker.is_empty() {
            return Err(Error::Config("preprocessor.fatal_marker must not be empty".into()));
        }

        let signature = TestSignature::from_config(&config.pattern)?;
        Ok(Self::new(preprocessor, signature, marker.clone()))
    }

    pub fn preprocessor(&self) -> &P {
        &self.preprocessor
    }

    /// Tests defined in `path`, in discovery order.
    ///
    /// Returns `Ok(None)` when either output stream carries the fatal-error
    /// marker, which is distinct from a file with no tests (`Ok(Some(vec![]))`).
    /// Only the preprocessed text is scanned.
    pub fn extract(&self, path: &Path) -> std::result::Result<Option<Vec<String>>, PreprocessError> {
        let output = self.preprocessor.run(path)?;

        if output.contains(&self.fatal_marker) {
            debug!("Fatal marker {:?} in output for {:?}", self.fatal_marker, path);
            return Ok(None);
        }

        let ids: Vec<String> = self
            .signature
            .find_all(&output.text)
            .into_iter()
            .map(str::to_string)
            .collect();
        debug!("Found {} tests in {:?}", ids.len(), path);
        Ok(Some(ids))
    }

    /// Build the id-map for `paths`, in order.
    ///
    /// Stops at the first file the preprocessor cannot expand; later paths
    /// are never preprocessed.
    pub fn extract_all<I, S>(&self, paths: I) -> Result<IdMap>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut map = IdMap::new();

        for path in paths {
            let path = path.as_ref();
            match self.extract(path)? {
                Some(ids) => map.push(path, ids),
                None => {
                    return Err(Error::Preprocess {
                        path: path.to_path_buf(),
                    })
                }
            }
        }

        info!("Discovered {} tests in {} files", map.total_tests(), map.len());
        Ok(map)
    }
}
