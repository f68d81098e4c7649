//! Single-example project generator.
//!
//! All-or-nothing policy: every precondition (known key, fresh
//! destination, present sources, parseable contract) is checked before
//! the first write. A failing copy still aborts the whole run and may
//! leave a partial tree for the caller to remove.

mod readme;

use std::path::{Path, PathBuf};

use crate::copy::{copy_tree, WrittenFile, EXCLUDED_DIRS};
use crate::error::{EntryKind, ScaffoldError};
use crate::manifest::rewrite_manifest;
use crate::registry;
use crate::solidity;

/// Directory holding the generator tooling itself, never copied into
/// its own output.
pub const TOOLING_DIR: &str = "scripts";

/// Manifest of one project-generation run.
#[derive(Debug, Clone)]
pub struct ProjectReport {
    /// Destination root that was created.
    pub destination: PathBuf,
    /// Declared name of the example's contract.
    pub contract_name: String,
    /// Files written, relative to the destination.
    pub files: Vec<WrittenFile>,
}

/// Scaffold a standalone project for the example `key`.
///
/// Copies the source tree at `root` into `dest` (minus build artifacts
/// and the tooling directory), rewrites the package manifest, and
/// writes a generated README.
///
/// # Errors
///
/// - [`ScaffoldError::NotFound`] — `key` is not in the example registry.
/// - [`ScaffoldError::AlreadyExists`] — `dest` already exists.
/// - [`ScaffoldError::MissingSource`] — the example's contract or test
///   file is absent under `root`.
/// - [`ScaffoldError::Parse`] — the contract source has no contract
///   declaration.
pub fn generate_project(
    key: &str,
    root: &Path,
    dest: &Path,
) -> Result<ProjectReport, ScaffoldError> {
    let example = registry::find_example(key).ok_or_else(|| ScaffoldError::NotFound {
        kind: EntryKind::Example,
        key: key.to_string(),
    })?;

    if dest.exists() {
        return Err(ScaffoldError::AlreadyExists(dest.to_path_buf()));
    }

    let contract_src = root.join(example.contract_path);
    let test_src = root.join(example.test_path);
    if !contract_src.is_file() {
        return Err(ScaffoldError::MissingSource(contract_src));
    }
    if !test_src.is_file() {
        return Err(ScaffoldError::MissingSource(test_src));
    }

    let contract_source = std::fs::read_to_string(&contract_src)?;
    let contract_name = solidity::contract_name(&contract_source).ok_or_else(|| {
        ScaffoldError::Parse(format!(
            "no contract declaration in {}",
            contract_src.display()
        ))
    })?;

    let mut exclude: Vec<&str> = EXCLUDED_DIRS.to_vec();
    exclude.push(TOOLING_DIR);
    let mut files = copy_tree(root, dest, &exclude)?;

    rewrite_manifest(
        &dest.join("package.json"),
        &registry::package_name(key),
        example.description,
    )?;

    let readme = readme::render(example, &contract_name);
    std::fs::write(dest.join("README.md"), &readme)?;
    files.push(WrittenFile {
        relative_path: PathBuf::from("README.md"),
        bytes: readme.len() as u64,
    });

    Ok(ProjectReport {
        destination: dest.to_path_buf(),
        contract_name,
        files,
    })
}
