//! Configuration types
//!
//! Every value has a default matching the ECC test suite layout, so an empty
//! (or absent) config file reproduces the stock `test.h` harness.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// testgen configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External preprocessor settings
    pub preprocessor: PreprocessorConfig,

    /// Test function signature
    pub pattern: PatternConfig,

    /// Generated file layout
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document outright
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Preprocessor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    /// Command to run, resolved through PATH
    pub command: String,

    /// Extra arguments placed before the source path
    pub args: Vec<String>,

    /// Include paths (-I flags)
    pub include_paths: Vec<PathBuf>,

    /// Macro definitions (-D/-U flags)
    pub defines: Vec<MacroDefinition>,

    /// Substring marking output the preprocessor could not expand
    pub fatal_marker: String,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            command: "cpp".into(),
            args: vec![],
            include_paths: vec![],
            defines: vec![],
            fatal_marker: "fatal error".into(),
        }
    }
}

/// Signature of a discoverable test function: `<return_type> name(<no_args>)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub return_type: String,
    pub no_args: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            return_type: "test_exit_code_t".into(),
            no_args: "void".into(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Support header included by every generated file
    pub support_header: String,

    /// Extension given to generated headers
    pub header_extension: String,

    /// File name of the aggregate entry point
    pub entry_file: String,

    /// Declaration macro, one invocation per test in a header
    pub export_macro: String,

    /// Registration call, one per test in the entry point
    pub register_macro: String,

    /// Final call handing argc/argv to the runner
    pub run_macro: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            support_header: "test.h".into(),
            header_extension: "h".into(),
            entry_file: "main.c".into(),
            export_macro: "EXPORT_TEST".into(),
            register_macro: "add_test".into(),
            run_macro: "run_tests".into(),
        }
    }
}

/// A macro definition passed to the preprocessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDefinition {
    pub name: String,
    pub value: Option<String>,
}

impl MacroDefinition {
    /// Create a macro that is simply defined (no value)
    pub fn defined(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some("1".to_string()),
        }
    }

    /// Create a macro with a specific value
    pub fn with_value(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    /// Create an undefined macro (for -U flag)
    pub fn undefined(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }

    /// Convert to a -D/-U preprocessor argument
    pub fn to_arg(&self) -> String {
        match &self.value {
            Some(v) => format!("-D{}={}", self.name, v),
            None => format!("-U{}", self.name),
        }
    }
}

impl std::str::FromStr for MacroDefinition {
    type Err = Error;

    /// Parse `NAME` or `NAME=VALUE`, as given to `-D`
    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value)),
            None => (s.trim(), None),
        };

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::Config(format!("invalid macro name: {:?}", s)));
        }

        Ok(match value {
            Some(v) => Self::with_value(name, v),
            None => Self::defined(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_harness() {
        let config = Config::default();

        assert_eq!(config.preprocessor.command, "cpp");
        assert_eq!(config.preprocessor.fatal_marker, "fatal error");
        assert_eq!(config.pattern.return_type, "test_exit_code_t");
        assert_eq!(config.pattern.no_args, "void");
        assert_eq!(config.output.support_header, "test.h");
        assert_eq!(config.output.entry_file, "main.c");
        assert_eq!(config.output.export_macro, "EXPORT_TEST");
        assert_eq!(config.output.register_macro, "add_test");
        assert_eq!(config.output.run_macro, "run_tests");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
preprocessor:
  command: clang
  args: ["-E"]
  include_paths: ["../libc/include"]
  defines:
    - name: ECC_TEST
      value: "1"
output:
  entry_file: runner.c
"#;
        let config = Config::from_yaml_str(yaml).unwrap();

        assert_eq!(config.preprocessor.command, "clang");
        assert_eq!(config.preprocessor.args, vec!["-E".to_string()]);
        assert_eq!(config.preprocessor.include_paths, vec![PathBuf::from("../libc/include")]);
        assert_eq!(config.preprocessor.defines, vec![MacroDefinition::defined("ECC_TEST")]);
        assert_eq!(config.preprocessor.fatal_marker, "fatal error");
        assert_eq!(config.output.entry_file, "runner.c");
        assert_eq!(config.output.support_header, "test.h");
        assert_eq!(config.pattern, PatternConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml_str("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml_str("preprocessor: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testgen.yaml");
        std::fs::write(&path, "pattern:\n  return_type: result_t\n").unwrap();

        let config = Config::load_yaml(&path).unwrap();
        assert_eq!(config.pattern.return_type, "result_t");
        assert_eq!(config.pattern.no_args, "void");

        let missing = Config::load_yaml(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, Error::Io(_)));
    }

    #[test]
    fn test_macro_to_arg() {
        assert_eq!(MacroDefinition::defined("FOO").to_arg(), "-DFOO=1");
        assert_eq!(MacroDefinition::with_value("BAR", "42").to_arg(), "-DBAR=42");
        assert_eq!(MacroDefinition::undefined("BAZ").to_arg(), "-UBAZ");
    }

    #[test]
    fn test_macro_from_str() {
        assert_eq!("FOO".parse::<MacroDefinition>().unwrap(), MacroDefinition::defined("FOO"));
        assert_eq!(
            "BAR=x y".parse::<MacroDefinition>().unwrap(),
            MacroDefinition::with_value("BAR", "x y")
        );
        assert_eq!("EMPTY=".parse::<MacroDefinition>().unwrap(), MacroDefinition::with_value("EMPTY", ""));
        assert!("".parse::<MacroDefinition>().is_err());
        assert!("=1".parse::<MacroDefinition>().is_err());
        assert!("A-B".parse::<MacroDefinition>().is_err());
    }
}
