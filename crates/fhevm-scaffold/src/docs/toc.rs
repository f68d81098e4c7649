//! Table-of-contents generation.

use std::fmt::Write;

/// File name of the API reference within the output directory.
pub const API_REFERENCE_FILE: &str = "api-reference.md";

/// Generate the SUMMARY.md table of contents linking the generated
/// contract pages and the API reference.
///
/// `pages` holds `(title, file name)` pairs in generation order. The
/// whole file is regenerated on every run.
pub fn generate_toc(pages: &[(String, String)]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Table of contents");
    let _ = writeln!(out);
    for (title, file) in pages {
        let _ = writeln!(out, "- [{title}]({file})");
    }
    let _ = writeln!(out, "- [API Reference]({API_REFERENCE_FILE})");

    out
}
