//! tokentally - Count LLM tokens across a directory tree
//!
//! tokentally:
//! - Walks every file under a directory, nested subdirectories included
//! - Tokenizes each UTF-8 file with a tiktoken encoding chosen by model name
//! - Reports total tokens, files processed and files skipped

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    core::render::configure_color();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
