//! # File System Operations Module / 文件系统操作模块
//!
//! Path helpers used around a run: naming the target, expanding `~`,
//! telling files from folders, and writing exported snapshots.
//!
//! 运行前后使用的路径工具：目标命名、`~` 展开、区分文件与文件夹，以及写出导出的快照。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::TargetKind;

/// The last component of `path`, or the whole path when it has none (e.g. `/`).
pub fn target_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Expands a leading `~` and environment variables in a user-typed path.
/// Falls back to the raw input when expansion fails.
pub fn expand_user_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(raw),
    }
}

/// Infers the kind of an existing target. Returns `None` if the path does not exist.
pub fn detect_target_kind(path: &Path) -> Option<TargetKind> {
    let meta = fs::metadata(path).ok()?;
    Some(if meta.is_dir() {
        TargetKind::Directory
    } else {
        TargetKind::File
    })
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_name_is_basename() {
        assert_eq!(target_name(Path::new("/tmp/project/test_math.py")), "test_math.py");
        assert_eq!(target_name(Path::new("tests/")), "tests");
        assert_eq!(target_name(Path::new("/")), "/");
    }

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_user_path("  tests/unit "), PathBuf::from("tests/unit"));
    }
}
