//! Token scanning backend
//!
//! Uses walkdir to visit every file under the root and feeds each one through
//! the resolved tokenizer. Per-file failures are counted, never raised.

use std::io::IsTerminal;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::file_reader::read_text;
use crate::core::model::{ScanResult, SkipReason};
use crate::core::paths::make_relative;
use crate::core::progress::{
    LineProgress, NoProgress, Progress, DEFAULT_CLEAR_WIDTH, DEFAULT_PROGRESS_WIDTH,
};
use crate::core::tokenizer::TokenizerHandle;

/// Tunables for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Characters of the relative path shown on the progress line
    pub progress_width: usize,

    /// Blanks written to clear the progress line
    pub clear_width: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            progress_width: DEFAULT_PROGRESS_WIDTH,
            clear_width: DEFAULT_CLEAR_WIDTH,
        }
    }
}

/// Tokenize one file
pub fn count_file(path: &Path, tokenizer: &TokenizerHandle) -> Result<usize, SkipReason> {
    let content = read_text(path)?;
    Ok(tokenizer.count(&content))
}

/// Count tokens in every file under `root`
///
/// Walker errors (typically directories that cannot be listed) are dropped:
/// files inside such directories are neither processed nor skipped.
pub fn scan_tokens(
    root: &Path,
    tokenizer: &TokenizerHandle,
    progress: &mut dyn Progress,
) -> ScanResult {
    let mut result = ScanResult::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !is_file_entry(&entry) {
            continue;
        }

        let path = entry.path();
        let relative = make_relative(path, root).unwrap_or_else(|| path.display().to_string());
        progress.show(&relative);

        result.record(&count_file(path, tokenizer));
    }

    progress.clear();
    result
}

/// Run a scan, drawing the progress line on stdout when it is a terminal
pub fn run_scan(root: &Path, tokenizer: &TokenizerHandle, config: ScanConfig) -> ScanResult {
    let stdout = std::io::stdout();
    if stdout.is_terminal() {
        let mut progress =
            LineProgress::new(stdout.lock(), config.progress_width, config.clear_width);
        scan_tokens(root, tokenizer, &mut progress)
    } else {
        scan_tokens(root, tokenizer, &mut NoProgress)
    }
}

/// Anything that is not a directory counts as a file. Symlinks are judged by
/// their target, so a link to a directory is ignored and a dangling link is
/// kept (and later skipped when it cannot be read).
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}
