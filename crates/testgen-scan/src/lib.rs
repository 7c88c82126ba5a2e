//! testgen Scan
//!
//! Discovers test functions in C sources. Each file goes through the C
//! preprocessor first, so tests produced by macros such as `START_TEST` are
//! found under their expanded names.
//!
//! ## Modules
//!
//! - `preprocessor` - the external preprocessor and a canned stand-in for tests
//! - `pattern` - the test function signature rule
//! - `extractor` - per-file discovery and the id-map builder

pub mod extractor;
pub mod pattern;
pub mod preprocessor;

pub use extractor::Extractor;
pub use pattern::TestSignature;
pub use preprocessor::{
    CommandPreprocessor, FakePreprocessor, PreprocessError, PreprocessOutput, Preprocessor,
};
