//! Pattern-based extraction from Solidity sources.
//!
//! Text scanning, not a parser: sources that deviate from the usual
//! formatting conventions may be missed, and callers fall back to
//! empty/placeholder output when nothing matches.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! sol_pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($re).ok());
    };
}

sol_pattern!(
    RE_CONTRACT_DECL,
    r"(?m)^\s*(?:abstract\s+)?contract\s+([A-Za-z_][A-Za-z0-9_]*)"
);

sol_pattern!(RE_DOC_LINE, r"(?m)^\s*///\s*(.+)$");

// Matches `<type> <visibility> [immutable|constant] <name> [= ...];`
// where the type is either a mapping or a plain identifier.
sol_pattern!(
    RE_STATE_VAR,
    r"(?m)^\s*(?:mapping\s*\([^;{]+\)|[A-Za-z_][A-Za-z0-9_]*(?:\[\])?)\s+(?:public|private|internal)\s+(?:(?:immutable|constant)\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*(?:=[^;]*)?;"
);

sol_pattern!(RE_FUNCTION, r"(?m)^\s*function\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(");

fn first_capture(pattern: &'static LazyLock<Option<Regex>>, source: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    re.captures(source)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn all_captures(pattern: &'static LazyLock<Option<Regex>>, source: &str) -> Vec<String> {
    let Some(re) = pattern.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Declared name of the first contract in `source`.
pub fn contract_name(source: &str) -> Option<String> {
    first_capture(&RE_CONTRACT_DECL, source)
}

/// First `///` doc-comment line, with a leading NatSpec tag stripped.
///
/// First match only; a contract with no doc comment yields `None` and
/// callers omit the description section.
pub fn first_doc_comment(source: &str) -> Option<String> {
    let line = first_capture(&RE_DOC_LINE, source)?;
    let line = strip_natspec_tag(&line);
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Names of state-variable declarations found in `source`.
pub fn state_variables(source: &str) -> Vec<String> {
    all_captures(&RE_STATE_VAR, source)
}

/// Names of function declarations found in `source`.
pub fn functions(source: &str) -> Vec<String> {
    all_captures(&RE_FUNCTION, source)
}

fn strip_natspec_tag(line: &str) -> String {
    let trimmed = line.trim();
    for tag in ["@title", "@notice", "@dev"] {
        if let Some(rest) = trimmed.strip_prefix(tag) {
            return rest.trim().to_string();
        }
    }
    trimmed.to_string()
}
