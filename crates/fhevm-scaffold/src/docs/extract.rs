//! Test-group documentation extraction.
//!
//! Scans a test source for named `describe(...)` groups and pairs each
//! with the block comment sitting directly above it. Pattern-based
//! scanning: unconventional formatting can miss or misattribute a
//! comment, and a group with no adjacent comment is simply skipped.

use std::sync::LazyLock;

use regex::Regex;

static RE_DESCRIBE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"describe\s*\(\s*["']([^"']+)["']"#).ok());

static RE_BLOCK_COMMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)/\*(.*?)\*/").ok());

/// A documented test group: the `describe` title and the cleaned body
/// of its preceding block comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTestDoc {
    pub group_title: String,
    pub comment_body: String,
}

/// Extract documented test groups from a test source.
pub fn extract_test_docs(source: &str) -> Vec<ExtractedTestDoc> {
    let (Some(re_describe), Some(re_comment)) = (RE_DESCRIBE.as_ref(), RE_BLOCK_COMMENT.as_ref())
    else {
        return Vec::new();
    };

    let comments: Vec<(usize, usize, &str)> = re_comment
        .captures_iter(source)
        .filter_map(|c| {
            let whole = c.get(0)?;
            let body = c.get(1)?;
            Some((whole.start(), whole.end(), body.as_str()))
        })
        .collect();

    let mut docs = Vec::new();
    for m in re_describe.captures_iter(source) {
        let (Some(whole), Some(title)) = (m.get(0), m.get(1)) else {
            continue;
        };
        // Nearest comment ending before the group, separated only by
        // whitespace.
        let preceding = comments
            .iter()
            .rev()
            .find(|(_, end, _)| *end <= whole.start());
        let Some((_, end, body)) = preceding else {
            continue;
        };
        if !source[*end..whole.start()].trim().is_empty() {
            continue;
        }
        let comment_body = clean_comment(body);
        if comment_body.is_empty() {
            continue;
        }
        docs.push(ExtractedTestDoc {
            group_title: title.as_str().to_string(),
            comment_body,
        });
    }

    docs
}

/// Strip leading `*` continuation markers and surrounding blank lines
/// from a block-comment body.
pub fn clean_comment(body: &str) -> String {
    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let trimmed = trimmed.strip_prefix('*').unwrap_or(trimmed);
            trimmed.strip_prefix(' ').unwrap_or(trimmed).trim_end()
        })
        .collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}
