//! Backends module - Filesystem work
//!
//! Provides:
//! - scan: Recursive token counting with walkdir

pub mod scan;
