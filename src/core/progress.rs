//! Progress display - The transient "Processing: ..." line
//!
//! Purely cosmetic. The scanner only talks to the [`Progress`] trait, so the
//! terminal line can be swapped for [`NoProgress`] when output is piped.

use std::io::Write;

/// Width of the path column on the progress line
pub const DEFAULT_PROGRESS_WIDTH: usize = 60;

/// Number of blanks written to wipe the progress line
pub const DEFAULT_CLEAR_WIDTH: usize = 80;

pub trait Progress {
    /// Show the item currently being processed
    fn show(&mut self, item: &str);

    /// Remove whatever is currently displayed
    fn clear(&mut self);
}

/// Discards all progress updates
#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn show(&mut self, _item: &str) {}

    fn clear(&mut self) {}
}

/// Rewrites a single line in place using carriage returns
pub struct LineProgress<W: Write> {
    out: W,
    width: usize,
    clear_width: usize,
}

impl<W: Write> LineProgress<W> {
    pub fn new(out: W, width: usize, clear_width: usize) -> Self {
        Self {
            out,
            width,
            clear_width,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

// Write failures are ignored: a broken progress line must not abort a scan.
impl<W: Write> Progress for LineProgress<W> {
    fn show(&mut self, item: &str) {
        let _ = write!(self.out, "\rProcessing: {}", fit_width(item, self.width));
        let _ = self.out.flush();
    }

    fn clear(&mut self) {
        let _ = write!(self.out, "\r{}\r", " ".repeat(self.clear_width));
        let _ = self.out.flush();
    }
}

/// Cut `s` to at most `width` characters and left-align it in `width` columns
pub fn fit_width(s: &str, width: usize) -> String {
    let cut: String = s.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}
