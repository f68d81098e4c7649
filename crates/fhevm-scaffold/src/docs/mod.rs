//! Documentation generator.
//!
//! Parameterized over a (contract, test, output) target; the
//! historical fixed pair survives only as [`default_target`]. Every
//! run regenerates all output files unconditionally, and the output is
//! byte-stable for unchanged inputs. A target with a missing source is
//! skipped with a warning while the shared artifacts (API reference,
//! table of contents, renderer config) are still written.

mod api;
mod config;
mod extract;
mod page;
mod toc;

pub use api::API_REFERENCE;
pub use config::{BookConfig, BookStructure};
pub use extract::{clean_comment, extract_test_docs, ExtractedTestDoc};
pub use page::{generate_contract_page, ContractDoc};
pub use toc::{generate_toc, API_REFERENCE_FILE};

use std::path::{Path, PathBuf};

use crate::copy::WrittenFile;
use crate::error::{ScaffoldError, Warning};
use crate::registry::{self, ExampleDescriptor};
use crate::solidity;

/// One contract/test pair to document.
#[derive(Debug, Clone)]
pub struct DocTarget {
    /// Registry key (or any label for ad-hoc targets), used in
    /// warnings.
    pub key: String,
    /// Contract source path, relative to the example root.
    pub contract_path: PathBuf,
    /// Test source path, relative to the example root.
    pub test_path: PathBuf,
}

impl DocTarget {
    pub fn from_example(example: &ExampleDescriptor) -> Self {
        Self {
            key: example.key.to_string(),
            contract_path: PathBuf::from(example.contract_path),
            test_path: PathBuf::from(example.test_path),
        }
    }
}

/// The pair the original tooling was hardwired to.
pub fn default_target() -> Option<DocTarget> {
    registry::find_example("artifact-auction").map(DocTarget::from_example)
}

/// Manifest of one documentation run.
#[derive(Debug, Clone)]
pub struct DocsReport {
    pub out_dir: PathBuf,
    /// Files written, relative to the output directory.
    pub files: Vec<WrittenFile>,
    /// Targets skipped for missing sources.
    pub warnings: Vec<Warning>,
}

/// Generate documentation for a single target.
pub fn generate_docs(
    target: &DocTarget,
    root: &Path,
    out_dir: &Path,
) -> Result<DocsReport, ScaffoldError> {
    generate(std::slice::from_ref(target), root, out_dir)
}

/// Generate documentation for every example in the registry, in
/// presentation order.
pub fn generate_docs_all(root: &Path, out_dir: &Path) -> Result<DocsReport, ScaffoldError> {
    let targets: Vec<DocTarget> = registry::examples()
        .iter()
        .map(DocTarget::from_example)
        .collect();
    generate(&targets, root, out_dir)
}

fn generate(
    targets: &[DocTarget],
    root: &Path,
    out_dir: &Path,
) -> Result<DocsReport, ScaffoldError> {
    std::fs::create_dir_all(out_dir)?;

    let mut files = Vec::new();
    let mut warnings = Vec::new();
    let mut pages = Vec::new();

    for target in targets {
        match generate_page(target, root, out_dir, &mut files)? {
            Some(page) => pages.push(page),
            None => warnings.push(Warning::new(format!(
                "skipping docs for '{}': missing contract or test source",
                target.key
            ))),
        }
    }

    write_doc(out_dir, API_REFERENCE_FILE, API_REFERENCE, &mut files)?;
    write_doc(out_dir, "SUMMARY.md", &generate_toc(&pages), &mut files)?;
    write_doc(
        out_dir,
        "book.json",
        &config::render(&BookConfig::default())?,
        &mut files,
    )?;

    Ok(DocsReport {
        out_dir: out_dir.to_path_buf(),
        files,
        warnings,
    })
}

/// Generate one contract page. Returns the `(title, file)` pair for
/// the table of contents, or `None` when a source file is absent.
fn generate_page(
    target: &DocTarget,
    root: &Path,
    out_dir: &Path,
    files: &mut Vec<WrittenFile>,
) -> Result<Option<(String, String)>, ScaffoldError> {
    let contract_src = root.join(&target.contract_path);
    let test_src = root.join(&target.test_path);
    if !contract_src.is_file() || !test_src.is_file() {
        return Ok(None);
    }

    let contract_source = std::fs::read_to_string(&contract_src)?;
    let test_source = std::fs::read_to_string(&test_src)?;

    // Extraction that finds nothing degrades to placeholders, never an
    // error; the title falls back to the file stem.
    let title = solidity::contract_name(&contract_source).unwrap_or_else(|| {
        contract_src
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.key.clone())
    });
    let description = solidity::first_doc_comment(&contract_source);
    let state_variables = solidity::state_variables(&contract_source);
    let functions = solidity::functions(&contract_source);
    let groups = extract_test_docs(&test_source);

    let page = generate_contract_page(&ContractDoc {
        title: &title,
        description: description.as_deref(),
        source_path: &target.contract_path.to_string_lossy(),
        state_variables: &state_variables,
        functions: &functions,
        groups: &groups,
    });

    let file = format!("{title}.md");
    write_doc(out_dir, &file, &page, files)?;
    Ok(Some((title, file)))
}

fn write_doc(
    out_dir: &Path,
    name: &str,
    content: &str,
    files: &mut Vec<WrittenFile>,
) -> Result<(), ScaffoldError> {
    std::fs::write(out_dir.join(name), content)?;
    files.push(WrittenFile {
        relative_path: PathBuf::from(name),
        bytes: content.len() as u64,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn fixture_root(root: &Path) {
        touch(
            &root.join("contracts/ArtifactAuction.sol"),
            r"/// @title ArtifactAuction
/// @notice Confidential auction over encrypted bids.
contract ArtifactAuction {
    address public beneficiary;
    euint64 private highestBid;

    function bid(externalEuint64 encryptedAmount, bytes calldata proof) external {}

    function endAuction() external {}
}
",
        );
        touch(
            &root.join("test/ArtifactAuction.ts"),
            r#"/*
 * Bids stay encrypted until the auction resolves.
 */
describe("Encrypted bidding", function () {});
"#,
        );
    }

    #[test]
    fn generates_page_and_shared_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let out = dir.path().join("docs");

        let target = default_target().unwrap();
        let report = generate_docs(&target, &root, &out).unwrap();

        assert!(report.warnings.is_empty());
        assert!(out.join("ArtifactAuction.md").is_file());
        assert!(out.join("api-reference.md").is_file());
        assert!(out.join("SUMMARY.md").is_file());
        assert!(out.join("book.json").is_file());

        let page = std::fs::read_to_string(out.join("ArtifactAuction.md")).unwrap();
        assert!(page.starts_with("# ArtifactAuction\n"));
        assert!(page.contains("Confidential auction over encrypted bids."));
        assert!(page.contains("Source: `contracts/ArtifactAuction.sol`"));
        assert!(page.contains("- `highestBid`"));
        assert!(page.contains("- `bid`"));
        assert!(page.contains("## Encrypted bidding"));
        assert!(page.contains("Bids stay encrypted until the auction resolves."));
    }

    #[test]
    fn toc_links_generated_page() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let out = dir.path().join("docs");

        generate_docs(&default_target().unwrap(), &root, &out).unwrap();

        let toc = std::fs::read_to_string(out.join("SUMMARY.md")).unwrap();
        assert!(toc.contains("[ArtifactAuction](ArtifactAuction.md)"));
        assert!(toc.contains("[API Reference](api-reference.md)"));
    }

    #[test]
    fn missing_sources_skip_page_but_write_shared_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        std::fs::create_dir_all(&root).unwrap();
        let out = dir.path().join("docs");

        let report = generate_docs(&default_target().unwrap(), &root, &out).unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("artifact-auction"));
        assert!(!out.join("ArtifactAuction.md").exists());
        assert!(out.join("api-reference.md").is_file());
        assert!(out.join("SUMMARY.md").is_file());
        assert!(out.join("book.json").is_file());
    }

    #[test]
    fn generation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let out = dir.path().join("docs");

        generate_docs(&default_target().unwrap(), &root, &out).unwrap();
        let first: Vec<(String, Vec<u8>)> = read_all(&out);
        generate_docs(&default_target().unwrap(), &root, &out).unwrap();
        let second: Vec<(String, Vec<u8>)> = read_all(&out);

        assert_eq!(first, second);
    }

    fn read_all(dir: &Path) -> Vec<(String, Vec<u8>)> {
        let mut entries: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        entries
            .into_iter()
            .map(|p| {
                (
                    p.file_name().unwrap().to_string_lossy().into_owned(),
                    std::fs::read(&p).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn all_examples_documented_when_sources_exist() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        touch(&root.join("contracts/Counter.sol"), "contract Counter {}\n");
        touch(&root.join("test/Counter.ts"), "describe(\"C\", () => {});\n");
        // fhe-counter sources intentionally absent.
        let out = dir.path().join("docs");

        let report = generate_docs_all(&root, &out).unwrap();

        assert!(out.join("Counter.md").is_file());
        assert!(out.join("ArtifactAuction.md").is_file());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("fhe-counter"));
    }
}
