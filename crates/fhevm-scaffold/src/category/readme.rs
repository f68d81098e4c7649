//! README templates for generated category projects.

use std::fmt::Write;

use crate::registry::{CategoryDescriptor, ExampleDescriptor};

/// One generated member, as needed by the README renderers.
#[derive(Debug, Clone)]
pub struct MemberEntry {
    pub key: String,
    pub description: String,
    pub contract_file: String,
    pub test_file: String,
}

impl MemberEntry {
    pub fn new(example: &ExampleDescriptor, contract_file: &str, test_file: &str) -> Self {
        Self {
            key: example.key.to_string(),
            description: example.description.to_string(),
            contract_file: contract_file.to_string(),
            test_file: test_file.to_string(),
        }
    }
}

/// Render the README for one member directory.
pub fn render_member(member: &MemberEntry) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", member.key);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", member.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Files");
    let _ = writeln!(out);
    let _ = writeln!(out, "- `contracts/{}`", member.contract_file);
    let _ = writeln!(out, "- `test/{}`", member.test_file);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Running");
    let _ = writeln!(out);
    let _ = writeln!(out, "From the project root:");
    let _ = writeln!(out);
    let _ = writeln!(out, "```sh");
    let _ = writeln!(
        out,
        "npx hardhat test examples/{}/test/{}",
        member.key, member.test_file
    );
    let _ = writeln!(out, "```");

    out
}

/// Render the category-level README: description, member table, and a
/// directory-tree diagram of the generated project.
pub fn render_category(
    category: &CategoryDescriptor,
    root_label: &str,
    config_files: &[String],
    members: &[MemberEntry],
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", category.display_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", category.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Included examples");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Example | Description |");
    let _ = writeln!(out, "|---------|-------------|");
    for m in members {
        let _ = writeln!(
            out,
            "| [{key}](examples/{key}/README.md) | {} |",
            m.description,
            key = m.key
        );
    }
    let _ = writeln!(out);

    write_tree(&mut out, root_label, config_files, members);

    out
}

fn write_tree(out: &mut String, root_label: &str, config_files: &[String], members: &[MemberEntry]) {
    let _ = writeln!(out, "## Layout");
    let _ = writeln!(out);
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "{root_label}/");
    for c in config_files {
        let _ = writeln!(out, "├── {c}");
    }
    let _ = writeln!(out, "└── examples/");
    for (i, m) in members.iter().enumerate() {
        let last = i + 1 == members.len();
        let branch = if last { "└──" } else { "├──" };
        let child_prefix = if last { "        " } else { "    │   " };
        let _ = writeln!(out, "    {branch} {}/", m.key);
        let _ = writeln!(out, "{child_prefix}├── contracts/{}", m.contract_file);
        let _ = writeln!(out, "{child_prefix}└── test/{}", m.test_file);
    }
    let _ = writeln!(out, "```");
}
