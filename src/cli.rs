//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::backends::scan::{run_scan, ScanConfig};
use crate::core::model::StartupError;
use crate::core::paths::{display_root, is_scannable_dir};
use crate::core::render::{render_fallback_notice, render_header, render_summary};
use crate::core::tokenizer::resolve_tokenizer;

/// Model used when --model is not given
pub const DEFAULT_MODEL: &str = "gpt-5";

/// tokentally - count LLM tokens in every file under a directory.
#[derive(Parser, Debug)]
#[command(name = "tokentally")]
#[command(
    author,
    version,
    about,
    long_about = r#"tokentally walks DIRECTORY recursively, tokenizes every file that reads as
UTF-8 text with a tiktoken encoding, and prints the total token count together
with the number of files processed and skipped.

Files that are not valid UTF-8 or cannot be read are skipped and counted.
Unknown model names fall back to the o200k_base encoding.

Examples:
    tokentally .
    tokentally src --model gpt-4o
    tokentally docs --model gpt-3.5-turbo
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Model whose tokenizer is used.
    #[arg(
        long,
        default_value = DEFAULT_MODEL,
        value_name = "MODEL",
        long_help = "Model whose tiktoken encoding is used for counting (default: gpt-5).\n\n\
Names tiktoken does not recognize fall back to the o200k_base encoding with a\n\
notice; this is not an error."
    )]
    pub model: String,
}

/// Check that `path` is an existing directory
pub fn validate_directory(path: &Path) -> Result<PathBuf, StartupError> {
    if !is_scannable_dir(path) {
        return Err(StartupError::InvalidDirectory(path.to_path_buf()));
    }
    Ok(display_root(path))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let root = validate_directory(&cli.directory)?;

    println!("{}", render_header(&root, &cli.model));

    let resolved = resolve_tokenizer(&cli.model).map_err(StartupError::from)?;
    if resolved.fell_back {
        println!(
            "{}",
            render_fallback_notice(&resolved.model, resolved.handle.encoding())
        );
    }

    let result = run_scan(&root, &resolved.handle, ScanConfig::default());

    println!("{}", render_summary(&result));
    Ok(())
}
