//! Filtered recursive directory copy.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Build/cache directory names never copied into generated projects.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "artifacts",
    "cache",
    "coverage",
    "types",
    "typechain-types",
    "dist",
    "output",
    ".git",
];

/// One file written by a generator, for the run's report.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    /// Path relative to the destination root.
    pub relative_path: PathBuf,
    /// Number of bytes written.
    pub bytes: u64,
}

fn keep(entry: &DirEntry, exclude: &[&str]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_str().unwrap_or_default();
    !exclude.contains(&name)
}

/// Recursively copy `src` into `dest`, skipping directories whose name
/// appears in `exclude` (at any depth).
///
/// `dest` and intermediate directories are created as needed. The copy
/// is sequential and aborts on the first I/O failure, possibly leaving
/// a partial tree behind.
pub fn copy_tree(src: &Path, dest: &Path, exclude: &[&str]) -> io::Result<Vec<WrittenFile>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(src)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep(e, exclude));

    for entry in walker {
        let entry = entry.map_err(io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?
            .to_path_buf();
        let target = dest.join(&rel);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let bytes = std::fs::copy(entry.path(), &target)?;
            files.push(WrittenFile {
                relative_path: rel,
                bytes,
            });
        }
    }

    Ok(files)
}
