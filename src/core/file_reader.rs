//! File reading - Whole-file strict UTF-8 reads
//!
//! A file either yields its full text or a [`SkipReason`]. There is no lossy
//! decoding and no truncation: a file that is not valid UTF-8 is skipped.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::core::model::SkipReason;

/// Read a file as UTF-8 text with line endings normalized to `\n`
pub fn read_text(path: &Path) -> Result<String, SkipReason> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| SkipReason::Decode)?;

    Ok(match normalize_newlines(&content) {
        Cow::Borrowed(_) => content,
        Cow::Owned(normalized) => normalized,
    })
}

/// Translate `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
