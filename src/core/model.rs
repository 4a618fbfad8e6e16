//! Data model - Scan totals and the error taxonomy
//!
//! Only two conditions are fatal to a run (see [`StartupError`]); everything
//! that can go wrong with an individual file is a [`SkipReason`] and ends up
//! as a bump of [`ScanResult::files_skipped`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::tokenizer::TokenizerError;

/// Aggregate counts for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Sum of token counts over every processed file
    pub total_tokens: usize,
    /// Files read, decoded and tokenized
    pub files_processed: usize,
    /// Files that could not be read or decoded
    pub files_skipped: usize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one per-file outcome into the totals
    pub fn record(&mut self, outcome: &Result<usize, SkipReason>) {
        match outcome {
            Ok(tokens) => {
                self.total_tokens += tokens;
                self.files_processed += 1;
            }
            Err(_) => self.files_skipped += 1,
        }
    }
}

/// Why a single file did not contribute to the totals
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("content is not valid UTF-8")]
    Decode,

    #[error("permission denied")]
    PermissionDenied,

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            io::ErrorKind::InvalidData => SkipReason::Decode,
            _ => SkipReason::Io(err),
        }
    }
}

/// Conditions that stop a run before any traversal happens
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}
