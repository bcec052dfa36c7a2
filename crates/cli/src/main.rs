//! LLM Contrast CLI entry point.

use colored::Colorize;

fn main() {
    if let Err(e) = llm_contrast_cli::run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
