//! Per-source test headers
//!
//! Each header declares the tests of one source file so the entry point can
//! reference them.

use std::path::Path;
use testgen_core::OutputConfig;

use crate::generated::GeneratedFile;
use crate::naming::{guard_macro, header_name, header_path};

/// Render the header named `header_name` declaring `ids`, in order
pub fn render_header(header_name: &str, ids: &[String], output: &OutputConfig) -> String {
    let guard = guard_macro(header_name);
    let mut out = String::new();

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str(&format!("#include \"{}\"\n\n", output.support_header));

    for id in ids {
        out.push_str(&format!("{}({});\n", output.export_macro, id));
    }

    out.push_str("\n#endif\n");
    out
}

/// The header for `source`, placed next to it
pub fn header_file(source: &Path, ids: &[String], output: &OutputConfig) -> GeneratedFile {
    let name = header_name(source, &output.header_extension);

    GeneratedFile {
        path: header_path(source, &output.header_extension),
        contents: render_header(&name, ids, output),
    }
}
