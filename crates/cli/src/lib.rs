//! CLI for LLM Contrast.
//!
//! This crate provides the `contrast` command: run comparisons, write
//! reports and print the static workflow breakdown.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use llm_contrast_core::{parse_item_count, ContrastConfig, Error, PacingMode, TaskInput};
use llm_contrast_engine::{io, markdown, ComparisonEngine, EngineOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// LLM Contrast CLI.
#[derive(Parser, Debug)]
#[command(name = "contrast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./contrast.toml when present).
    #[arg(short, long, global = true, env = "CONTRAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that run a comparison.
#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of content items to simulate.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub items: i64,

    /// Query used for query processing and knowledge synthesis.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Seed for the duration generator (overrides configuration).
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sleep through each simulated stage.
    #[arg(long)]
    pub live: bool,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare both workflows and print the result as JSON.
    Compare {
        /// Comparison inputs.
        #[command(flatten)]
        run: RunArgs,

        /// Compare a single category instead of all three.
        #[arg(long)]
        category: Option<String>,

        /// Print compact JSON.
        #[arg(long)]
        compact: bool,
    },

    /// Compare both workflows and write report files.
    ///
    /// Writes `comparison.json` and `summary.md` to the output directory.
    Report {
        /// Comparison inputs.
        #[command(flatten)]
        run: RunArgs,

        /// Output directory override.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, or both.
        #[arg(short, long, default_value = "both")]
        format: String,
    },

    /// Print the static workflow breakdown.
    Visualize {
        /// Print a markdown table instead of JSON.
        #[arg(long)]
        markdown: bool,
    },

    /// Show version and resolved configuration.
    Status {
        /// Show detailed status information.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Report file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `comparison.json` only
    Json,
    /// `summary.md` only
    Markdown,
    /// Both files
    Both,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "both" => Ok(Self::Both),
            _ => Err(Error::invalid_input(format!("unknown output format: {s}"))),
        }
    }
}

/// Initialize logging to stderr so stdout carries only command output.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber installed earlier in the process (tests, embedding) keeps priority.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Serialize in declaration order, pretty unless `compact`.
fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

/// Build engine options from configuration and command-line overrides.
pub fn engine_options(config: &ContrastConfig, run: &RunArgs) -> EngineOptions {
    let mut options = EngineOptions::from(config);
    if run.seed.is_some() {
        options.seed = run.seed;
    }
    if run.live {
        options.pacing = PacingMode::Live;
    }
    options
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = ContrastConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config.log_level);
    execute(cli.command, &config, &mut std::io::stdout())
}

/// Execute one command, writing its output to `out`.
pub fn execute(
    command: Commands,
    config: &ContrastConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Compare {
            run,
            category,
            compact,
        } => {
            let engine = ComparisonEngine::with_options(engine_options(config, &run));
            let json = match category {
                Some(tag) => {
                    let input = TaskInput::parse(&tag, run.items, run.query.as_str())?;
                    to_json(&engine.compare(&input)?, compact)?
                }
                None => {
                    let item_count = parse_item_count(run.items)?;
                    to_json(&engine.compare_count(item_count, &run.query)?, compact)?
                }
            };
            writeln!(out, "{json}")?;
            Ok(())
        }
        Commands::Report {
            run,
            output,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let item_count = parse_item_count(run.items)?;
            let engine = ComparisonEngine::with_options(engine_options(config, &run));
            let report = engine.compare_count(item_count, &run.query)?;

            let dir = output.unwrap_or_else(|| PathBuf::from(&config.output_dir));
            io::ensure_output_dir(&dir)?;

            let mut written = Vec::new();
            if matches!(format, OutputFormat::Json | OutputFormat::Both) {
                let path = dir.join(io::REPORT_JSON);
                io::write_report_json(&report, &path)?;
                written.push(path);
            }
            if matches!(format, OutputFormat::Markdown | OutputFormat::Both) {
                let path = dir.join(io::REPORT_MARKDOWN);
                io::write_report_markdown(&report, &path)?;
                written.push(path);
            }

            info!(dir = %dir.display(), files = written.len(), "Report written");
            for path in &written {
                writeln!(out, "Wrote {}", path.display())?;
            }
            Ok(())
        }
        Commands::Visualize {
            markdown: as_markdown,
        } => {
            let data = ComparisonEngine::new().visualization_breakdown();
            if as_markdown {
                write!(out, "{}", markdown::render_visualization(&data))?;
            } else {
                writeln!(out, "{}", serde_json::to_string_pretty(&data)?)?;
            }
            Ok(())
        }
        Commands::Status { detailed } => {
            writeln!(out, "{}", "LLM Contrast".bold())?;
            writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;

            if detailed {
                let seed = config
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "entropy".to_string());
                writeln!(out, "\nConfiguration:")?;
                writeln!(out, "  - seed: {seed}")?;
                writeln!(out, "  - pacing: {}", config.pacing)?;
                writeln!(out, "  - output_dir: {}", config.output_dir)?;
                writeln!(out, "  - log_level: {}", config.log_level)?;
            }
            Ok(())
        }
    }
}
