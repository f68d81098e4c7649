//! Category project generator.
//!
//! Deliberate partial-success policy, unlike the single-project
//! generator: a member with a missing source file (or an unresolved
//! key) is skipped with a warning and the remaining members still
//! generate.

mod readme;

use std::path::{Path, PathBuf};

use crate::copy::WrittenFile;
use crate::error::{EntryKind, ScaffoldError, Warning};
use crate::manifest::rewrite_manifest;
use crate::registry;

use readme::MemberEntry;

/// Shared configuration files copied from the base template into the
/// destination root. Absent files are skipped.
pub const SHARED_CONFIG_FILES: &[&str] = &[
    "package.json",
    "hardhat.config.ts",
    "tsconfig.json",
    ".gitignore",
    ".npmignore",
    ".eslintrc.yml",
    ".prettierrc.yml",
    ".solhint.json",
];

/// Directory under the source root holding the shared template files.
pub const BASE_TEMPLATE_DIR: &str = "base-template";

/// Manifest of one category-generation run.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// Destination root that was created.
    pub destination: PathBuf,
    /// Keys of members that generated successfully, in registry order.
    pub generated: Vec<String>,
    /// Files written, relative to the destination.
    pub files: Vec<WrittenFile>,
    /// Members skipped and other non-fatal conditions.
    pub warnings: Vec<Warning>,
}

/// Scaffold a multi-example project for the category `key`.
///
/// # Errors
///
/// - [`ScaffoldError::NotFound`] — `key` is not in the category registry.
/// - [`ScaffoldError::AlreadyExists`] — `dest` already exists.
///
/// Missing member sources are not errors; they surface as warnings in
/// the returned report.
pub fn generate_category(
    key: &str,
    root: &Path,
    dest: &Path,
) -> Result<CategoryReport, ScaffoldError> {
    let category = registry::find_category(key).ok_or_else(|| ScaffoldError::NotFound {
        kind: EntryKind::Category,
        key: key.to_string(),
    })?;

    if dest.exists() {
        return Err(ScaffoldError::AlreadyExists(dest.to_path_buf()));
    }

    let mut files = Vec::new();
    let mut warnings = Vec::new();
    let mut members = Vec::new();

    std::fs::create_dir_all(dest.join("examples"))?;

    for member_key in category.members {
        match resolve_member(category.key, member_key, root) {
            Ok(member) => {
                copy_member(&member, dest, &mut files)?;
                members.push(member.entry);
            }
            Err(w) => warnings.push(w),
        }
    }

    let config_files = copy_shared_config(root, dest, &mut files)?;

    let root_label = registry::category_package_name(key);
    let category_readme = readme::render_category(category, &root_label, &config_files, &members);
    write_report_file(dest, Path::new("README.md"), &category_readme, &mut files)?;

    let manifest_path = dest.join("package.json");
    if manifest_path.is_file() {
        rewrite_manifest(&manifest_path, &root_label, category.description)?;
    } else {
        warnings.push(Warning::new(format!(
            "base template has no package.json; manifest for '{key}' not written"
        )));
    }

    Ok(CategoryReport {
        destination: dest.to_path_buf(),
        generated: members.into_iter().map(|m| m.key).collect(),
        files,
        warnings,
    })
}

/// A member whose source files were found on disk.
struct ResolvedMember {
    entry: MemberEntry,
    contract_src: PathBuf,
    test_src: PathBuf,
}

/// Resolve one member key to its source files, or the warning that
/// explains why it is being skipped.
fn resolve_member(
    category_key: &str,
    member_key: &str,
    root: &Path,
) -> Result<ResolvedMember, Warning> {
    let Some(example) = registry::find_example(member_key) else {
        return Err(Warning::new(format!(
            "category '{category_key}' references unknown example '{member_key}'; skipping"
        )));
    };

    let contract_src = root.join(example.contract_path);
    let test_src = root.join(example.test_path);
    for src in [&contract_src, &test_src] {
        if !src.is_file() {
            return Err(Warning::new(format!(
                "skipping '{member_key}': missing source file {}",
                src.display()
            )));
        }
    }

    let entry = MemberEntry::new(example, &basename(&contract_src), &basename(&test_src));
    Ok(ResolvedMember {
        entry,
        contract_src,
        test_src,
    })
}

fn copy_member(
    member: &ResolvedMember,
    dest: &Path,
    files: &mut Vec<WrittenFile>,
) -> Result<(), ScaffoldError> {
    let key = &member.entry.key;
    let member_dir = dest.join("examples").join(key);
    std::fs::create_dir_all(member_dir.join("contracts"))?;
    std::fs::create_dir_all(member_dir.join("test"))?;

    let contract_rel = PathBuf::from("examples")
        .join(key)
        .join("contracts")
        .join(&member.entry.contract_file);
    let bytes = std::fs::copy(&member.contract_src, dest.join(&contract_rel))?;
    files.push(WrittenFile {
        relative_path: contract_rel,
        bytes,
    });

    let test_rel = PathBuf::from("examples")
        .join(key)
        .join("test")
        .join(&member.entry.test_file);
    let bytes = std::fs::copy(&member.test_src, dest.join(&test_rel))?;
    files.push(WrittenFile {
        relative_path: test_rel,
        bytes,
    });

    let member_readme = readme::render_member(&member.entry);
    let readme_rel = PathBuf::from("examples").join(key).join("README.md");
    write_report_file(dest, &readme_rel, &member_readme, files)?;

    Ok(())
}

fn copy_shared_config(
    root: &Path,
    dest: &Path,
    files: &mut Vec<WrittenFile>,
) -> Result<Vec<String>, ScaffoldError> {
    let base = root.join(BASE_TEMPLATE_DIR);
    let mut copied = Vec::new();

    for name in SHARED_CONFIG_FILES {
        let src = base.join(name);
        if !src.is_file() {
            continue;
        }
        let bytes = std::fs::copy(&src, dest.join(name))?;
        files.push(WrittenFile {
            relative_path: PathBuf::from(name),
            bytes,
        });
        copied.push((*name).to_string());
    }

    Ok(copied)
}

fn write_report_file(
    dest: &Path,
    relative: &Path,
    content: &str,
    files: &mut Vec<WrittenFile>,
) -> Result<(), ScaffoldError> {
    std::fs::write(dest.join(relative), content)?;
    files.push(WrittenFile {
        relative_path: relative.to_path_buf(),
        bytes: content.len() as u64,
    });
    Ok(())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
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
        touch(&root.join("contracts/Counter.sol"), "contract Counter {}\n");
        touch(&root.join("contracts/FHECounter.sol"), "contract FHECounter {}\n");
        touch(&root.join("test/Counter.ts"), "describe(\"Counter\", () => {});\n");
        touch(
            &root.join("test/FHECounter.ts"),
            "describe(\"FHECounter\", () => {});\n",
        );
        touch(
            &root.join("base-template/package.json"),
            r#"{"name": "base", "description": "base", "private": true}"#,
        );
        touch(&root.join("base-template/hardhat.config.ts"), "export default {};\n");
        touch(&root.join("base-template/.gitignore"), "node_modules\n");
    }

    #[test]
    fn generates_every_member_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let dest = dir.path().join("out");

        let report = generate_category("basic", &root, &dest).unwrap();

        assert_eq!(report.generated, ["counter", "fhe-counter"]);
        assert!(report.warnings.is_empty());
        assert!(dest.join("examples/counter/contracts/Counter.sol").is_file());
        assert!(dest.join("examples/counter/test/Counter.ts").is_file());
        assert!(dest.join("examples/counter/README.md").is_file());
        assert!(dest
            .join("examples/fhe-counter/contracts/FHECounter.sol")
            .is_file());
        assert!(dest.join("README.md").is_file());
    }

    #[test]
    fn member_dirs_hold_exactly_one_contract_and_one_test() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let dest = dir.path().join("out");

        generate_category("basic", &root, &dest).unwrap();

        for member in ["counter", "fhe-counter"] {
            for sub in ["contracts", "test"] {
                let entries: Vec<_> = std::fs::read_dir(dest.join("examples").join(member).join(sub))
                    .unwrap()
                    .collect();
                assert_eq!(entries.len(), 1, "{member}/{sub}");
            }
        }
    }

    #[test]
    fn missing_member_source_skips_only_that_member() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        std::fs::remove_file(root.join("contracts/Counter.sol")).unwrap();
        let dest = dir.path().join("out");

        let report = generate_category("basic", &root, &dest).unwrap();

        assert_eq!(report.generated, ["fhe-counter"]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("counter"));
        assert!(!dest.join("examples/counter").exists());
        assert!(dest
            .join("examples/fhe-counter/contracts/FHECounter.sol")
            .is_file());
    }

    #[test]
    fn unknown_category_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let dest = dir.path().join("out");

        let err = generate_category("nonexistent", &root, &dest).unwrap_err();

        assert!(matches!(err, ScaffoldError::NotFound { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn existing_destination_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let dest = dir.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();

        let err = generate_category("basic", &root, &dest).unwrap_err();

        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
    }

    #[test]
    fn shared_config_copied_and_manifest_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        let dest = dir.path().join("out");

        generate_category("basic", &root, &dest).unwrap();

        assert!(dest.join("hardhat.config.ts").is_file());
        assert!(dest.join(".gitignore").is_file());
        // Absent template files are skipped without complaint.
        assert!(!dest.join("tsconfig.json").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dest.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "fhevm-basic-examples");
        assert_eq!(
            manifest["description"],
            "Plain and FHE-encrypted counters for getting started"
        );
        assert_eq!(manifest["private"], true);
    }

    #[test]
    fn missing_base_manifest_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        std::fs::remove_file(root.join("base-template/package.json")).unwrap();
        let dest = dir.path().join("out");

        let report = generate_category("basic", &root, &dest).unwrap();

        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("package.json")));
        assert!(!dest.join("package.json").exists());
    }

    #[test]
    fn category_readme_reflects_generated_members() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        fixture_root(&root);
        std::fs::remove_file(root.join("test/FHECounter.ts")).unwrap();
        let dest = dir.path().join("out");

        generate_category("basic", &root, &dest).unwrap();

        let readme = std::fs::read_to_string(dest.join("README.md")).unwrap();
        assert!(readme.contains("[counter](examples/counter/README.md)"));
        assert!(!readme.contains("[fhe-counter]"));
    }
}
