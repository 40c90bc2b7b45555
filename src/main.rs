use std::{fs::read_to_string, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use hslex::{report::report::write_reports, tokenize};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

/// Scan a Haskell-like source file and write token reports.
#[derive(Parser, Debug)]
#[command(name = "hslex", version, about)]
struct Args {
    /// Source file to scan.
    #[arg(default_value = "lexer/input.txt")]
    input: PathBuf,

    /// Directory the token reports are written to.
    #[arg(long, default_value = "results")]
    out_dir: PathBuf,

    /// Do not print scan diagnostics.
    #[arg(short, long)]
    quiet: bool,
}

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// `warn` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let source = read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let output = tokenize(&source);
    info!(elapsed = ?start.elapsed(), tokens = output.tokens.len(), "tokenized");

    if output.has_diagnostics() {
        warn!(count = output.diagnostics.len(), "scan reported diagnostics");
        for diagnostic in &output.diagnostics {
            if !args.quiet {
                println!("{}", diagnostic);
            }
            info!(tip = %diagnostic.get_tip(), "{}", diagnostic.get_error_name());
        }
    }

    write_reports(&output, &args.out_dir)
        .with_context(|| format!("failed to write reports to {}", args.out_dir.display()))?;

    Ok(())
}
