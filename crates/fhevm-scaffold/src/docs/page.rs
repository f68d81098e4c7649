//! Per-contract markdown page generator.

use std::fmt::Write;

use crate::docs::extract::ExtractedTestDoc;

/// Everything the page renderer needs about one contract.
#[derive(Debug, Clone)]
pub struct ContractDoc<'a> {
    /// Page title, normally the declared contract name.
    pub title: &'a str,
    /// One-line description from the contract's first doc comment.
    pub description: Option<&'a str>,
    /// Contract source path, relative to the example root.
    pub source_path: &'a str,
    pub state_variables: &'a [String],
    pub functions: &'a [String],
    pub groups: &'a [ExtractedTestDoc],
}

/// Placeholder emitted when pattern extraction finds nothing.
const NONE_PLACEHOLDER: &str = "_None detected._";

/// Generate the markdown page for a single contract.
pub fn generate_contract_page(doc: &ContractDoc<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", doc.title);
    let _ = writeln!(out);
    if let Some(description) = doc.description {
        let _ = writeln!(out, "{description}");
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Overview");
    let _ = writeln!(out);
    let _ = writeln!(out, "Source: `{}`", doc.source_path);
    let _ = writeln!(out);

    write_name_list(&mut out, "State variables", doc.state_variables);
    write_name_list(&mut out, "Functions", doc.functions);

    for group in doc.groups {
        let _ = writeln!(out, "## {}", group.group_title);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.comment_body);
        let _ = writeln!(out);
    }

    out
}

fn write_name_list(out: &mut String, heading: &str, names: &[String]) {
    let _ = writeln!(out, "## {heading}");
    let _ = writeln!(out);
    if names.is_empty() {
        let _ = writeln!(out, "{NONE_PLACEHOLDER}");
    } else {
        for name in names {
            let _ = writeln!(out, "- `{name}`");
        }
    }
    let _ = writeln!(out);
}
