//! Core type definitions

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Tests discovered in one source file, in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceTests {
    /// Source path exactly as given on the command line
    pub path: PathBuf,
    /// Test identifiers, duplicates retained
    pub tests: Vec<String>,
}

/// Ordered mapping from source path to its discovered tests.
///
/// Entry order is command-line order and fixes the order tests are
/// registered (and later run) in. Entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdMap {
    entries: Vec<SourceTests>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the tests found for `path`
    pub fn push(&mut self, path: impl Into<PathBuf>, tests: Vec<String>) {
        self.entries.push(SourceTests {
            path: path.into(),
            tests,
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceTests> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[SourceTests] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }

    /// Number of tests across all files
    pub fn total_tests(&self) -> usize {
        self.entries.iter().map(|e| e.tests.len()).sum()
    }

    /// Path of the first source, which anchors the entry file location
    pub fn first_path(&self) -> Option<&Path> {
        self.entries.first().map(|e| e.path.as_path())
    }
}

impl<'a> IntoIterator for &'a IdMap {
    type Item = &'a SourceTests;
    type IntoIter = std::slice::Iter<'a, SourceTests>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
