//! Output path and macro name derivation

use std::path::{Path, PathBuf};

/// File name of the header generated for `source`: the basename with its
/// extension replaced by `ext`. Non-UTF-8 bytes are replaced, so this is
/// only for the `#include` text; use [`header_path`] for the file itself.
pub fn header_name(source: &Path, ext: &str) -> String {
    let file_name = source.file_name().map(Path::new).unwrap_or(source);
    file_name.with_extension(ext).to_string_lossy().into_owned()
}

/// Location of the header generated for `source`, next to the source
pub fn header_path(source: &Path, ext: &str) -> PathBuf {
    source.with_extension(ext)
}

/// Include guard for a header name: uppercased, every character that is not
/// an ASCII letter or digit replaced with `_`.
///
/// Distinct names can share a guard (`a.b.h` and `a_b.h`); nothing checks for it.
pub fn guard_macro(header_name: &str) -> String {
    header_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Location of the aggregate entry file: beside the first source
pub fn entry_path(first_source: &Path, entry_file: &str) -> PathBuf {
    match first_source.parent() {
        Some(dir) => dir.join(entry_file),
        None => PathBuf::from(entry_file),
    }
}
