//! Aggregate entry point
//!
//! `main.c` includes every generated header, registers each test with the
//! runner and hands `argc`/`argv` to it. Registration order is argument
//! order, then discovery order within each file; the runner executes tests
//! in that order.

use std::path::Path;
use testgen_core::{IdMap, OutputConfig};

use crate::generated::GeneratedFile;
use crate::naming::entry_path;

/// Render the entry point for `map`. `header_names` holds one header per
/// map entry, in the same order.
pub fn render_entry(map: &IdMap, header_names: &[String], output: &OutputConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("#include \"{}\"\n\n", output.support_header));
    for name in header_names {
        out.push_str(&format!("#include \"{}\"\n", name));
    }
    out.push('\n');

    out.push_str("int main(int argc, char** argv)\n");
    out.push_str("{\n");
    for source in map {
        for id in &source.tests {
            out.push_str(&format!("    {}({});\n", output.register_macro, id));
        }
        out.push('\n');
    }
    out.push_str(&format!("    {}(argc, argv);\n", output.run_macro));
    out.push_str("}\n");
    out
}

/// The entry point, placed beside `first_source`
pub fn entry_file(
    first_source: &Path,
    map: &IdMap,
    header_names: &[String],
    output: &OutputConfig,
) -> GeneratedFile {
    GeneratedFile {
        path: entry_path(first_source, &output.entry_file),
        contents: render_entry(map, header_names, output),
    }
}
