//! README template for generated single-example projects.

use std::fmt::Write;

use crate::registry::ExampleDescriptor;

/// Render the README for a generated project.
pub fn render(example: &ExampleDescriptor, contract_name: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {contract_name}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", example.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Getting started");
    let _ = writeln!(out);
    let _ = writeln!(out, "```sh");
    let _ = writeln!(out, "npm install");
    let _ = writeln!(out, "npx hardhat compile");
    let _ = writeln!(out, "npx hardhat test");
    let _ = writeln!(out, "```");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Layout");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "- `{}` — the {contract_name} contract",
        example.contract_path
    );
    let _ = writeln!(out, "- `{}` — its test suite", example.test_path);

    out
}
