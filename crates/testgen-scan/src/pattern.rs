//! Test function signature rule
//!
//! A test is `<return_type> <ws>+ <ident> ( <no_args> )` where `<ident>` is
//! `[A-Za-z0-9_]+`. The rule is applied to raw preprocessor output, so it
//! also matches declarations and ignores C token boundaries before the
//! return type.

use regex::Regex;
use testgen_core::{Error, PatternConfig, Result};

/// Compiled test signature
#[derive(Debug, Clone)]
pub struct TestSignature {
    regex: Regex,
}

impl TestSignature {
    /// Build the rule for the given return-type and no-argument markers
    pub fn new(return_type: &str, no_args: &str) -> Result<Self> {
        let pattern = format!(
            r"{}\s+([A-Za-z0-9_]+)\({}\)",
            regex::escape(return_type),
            regex::escape(no_args)
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| Error::Config(format!("invalid test signature: {}", e)))?;
        Ok(Self { regex })
    }

    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        Self::new(&config.return_type, &config.no_args)
    }

    /// All test names in `text`, left to right, duplicates kept
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
