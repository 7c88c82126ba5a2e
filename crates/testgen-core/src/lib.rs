//! testgen Core
//!
//! Core types, configuration and errors shared by the testgen crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, MacroDefinition, OutputConfig, PatternConfig, PreprocessorConfig};
pub use error::{Error, Result};
pub use types::{IdMap, SourceTests};
