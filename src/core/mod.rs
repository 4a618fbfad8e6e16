//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Scan totals and error types (model)
//! - Tokenizer resolution for a model name
//! - Path utilities
//! - Strict UTF-8 file reading
//! - Progress line and summary rendering

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod progress;
pub mod render;
pub mod tokenizer;
