//! testgen Codegen
//!
//! Renders the generated harness sources from an id-map:
//!
//! - `header` - one `EXPORT_TEST` header per source file
//! - `entry` - the aggregate `main.c` registering every test
//! - `naming` - header, guard and entry path derivation
//! - `generated` - rendered files and how they are written
//! - `generator` - the scan, render and write pipeline

pub mod entry;
pub mod generated;
pub mod generator;
pub mod header;
pub mod naming;

pub use generated::GeneratedFile;
pub use generator::{Generator, Report};

#[cfg(test)]
mod tests;
