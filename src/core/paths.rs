//! Path utilities
//!
//! Display paths are relative to the scan root and always use '/' as separator.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Absolute form of `path` for display, without resolving symlinks
pub fn display_root(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// True if `path` exists and is a directory (following symlinks)
pub fn is_scannable_dir(path: &Path) -> bool {
    path.is_dir()
}
