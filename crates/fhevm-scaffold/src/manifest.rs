//! Package-manifest rewriting for generated projects.

use std::path::Path;

use crate::error::ScaffoldError;

/// Rewrite the `name` and `description` fields of the package manifest
/// at `path`, leaving every other field (and field order) untouched.
pub fn rewrite_manifest(path: &Path, name: &str, description: &str) -> Result<(), ScaffoldError> {
    let raw = std::fs::read_to_string(path)?;
    let mut doc: serde_json::Value = serde_json::from_str(&raw)?;
    let obj = doc.as_object_mut().ok_or_else(|| {
        ScaffoldError::Parse(format!("{} is not a JSON object", path.display()))
    })?;

    obj.insert("name".to_string(), serde_json::Value::from(name));
    obj.insert(
        "description".to_string(),
        serde_json::Value::from(description),
    );

    let mut rendered = serde_json::to_string_pretty(&doc)?;
    rendered.push('\n');
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_name_and_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{
  "name": "fhevm-hardhat-template",
  "description": "template",
  "version": "1.0.0"
}
"#,
        )
        .unwrap();

        rewrite_manifest(&path, "fhevm-counter", "Simple incrementing counter").unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["name"], "fhevm-counter");
        assert_eq!(doc["description"], "Simple incrementing counter");
        assert_eq!(doc["version"], "1.0.0");
    }

    #[test]
    fn preserves_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"version": "1.0.0", "name": "x", "scripts": {"test": "hardhat test"}}"#,
        )
        .unwrap();

        rewrite_manifest(&path, "fhevm-fhe-counter", "desc").unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        let version_pos = rendered.find("\"version\"").unwrap();
        let name_pos = rendered.find("\"name\"").unwrap();
        let scripts_pos = rendered.find("\"scripts\"").unwrap();
        assert!(version_pos < name_pos);
        assert!(name_pos < scripts_pos);
    }

    #[test]
    fn adds_description_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name": "x"}"#).unwrap();

        rewrite_manifest(&path, "fhevm-counter", "added").unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["description"], "added");
    }

    #[test]
    fn rejects_non_object_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = rewrite_manifest(&path, "x", "y").unwrap_err();
        assert!(matches!(err, ScaffoldError::Parse(_)));
    }

    #[test]
    fn missing_manifest_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = rewrite_manifest(&dir.path().join("package.json"), "x", "y").unwrap_err();
        assert!(matches!(err, ScaffoldError::Io(_)));
    }
}
