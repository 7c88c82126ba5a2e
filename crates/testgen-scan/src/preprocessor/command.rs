//! External Preprocessor
//!
//! Runs the configured preprocessor command (`cpp` by default) once per
//! source file and hands back its stdout and stderr.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use testgen_core::{MacroDefinition, PreprocessorConfig};
use tracing::{debug, warn};

use super::{PreprocessError, PreprocessOutput, Preprocessor};

/// Options for preprocessing
#[derive(Debug, Clone, Default)]
pub struct PreprocessOptions {
    /// Macro definitions (-D/-U flags)
    pub defines: Vec<MacroDefinition>,
    /// Include paths (-I flags)
    pub includes: Vec<PathBuf>,
    /// Additional arguments, passed through verbatim
    pub extra_args: Vec<String>,
}

impl From<&PreprocessorConfig> for PreprocessOptions {
    fn from(config: &PreprocessorConfig) -> Self {
        Self {
            defines: config.defines.clone(),
            includes: config.include_paths.clone(),
            extra_args: config.args.clone(),
        }
    }
}

/// Preprocessor backed by an external command
pub struct CommandPreprocessor {
    /// Command to execute
    command: String,
    options: PreprocessOptions,
}

impl CommandPreprocessor {
    /// Create a preprocessor running `command` with the given options
    pub fn new(command: impl Into<String>, options: PreprocessOptions) -> Self {
        Self {
            command: command.into(),
            options,
        }
    }

    /// Create a preprocessor from the `preprocessor` config section
    pub fn from_config(config: &PreprocessorConfig) -> Self {
        Self::new(config.command.clone(), PreprocessOptions::from(config))
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Build the argument list preceding the source path
    fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        for include in &self.options.includes {
            args.push(format!("-I{}", include.display()));
        }

        for macro_def in &self.options.defines {
            args.push(macro_def.to_arg());
        }

        args.extend(self.options.extra_args.iter().cloned());
        args
    }
}

impl Preprocessor for CommandPreprocessor {
    fn run(&self, path: &Path) -> Result<PreprocessOutput, PreprocessError> {
        let args = self.build_args();
        debug!("Preprocessing {:?}: {} {:?}", path, self.command, args);

        let output = Command::new(&self.command)
            .args(&args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| PreprocessError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // Only the fatal-error marker decides failure; the status is informational.
        if !output.status.success() {
            warn!("{} exited with {} for {:?}", self.command, output.status, path);
        }

        Ok(PreprocessOutput::new(
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}
