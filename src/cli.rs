//! Command-line interface for the extractor.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::aggregator::run_with_progress;
use crate::config::{validate_cutoff_year, DEFAULT_CUTOFF_YEAR};
use crate::error::{ExtractorError, Result};

/// CCE Extractor - Flatten copyright registration entries into a CSV table.
#[derive(Parser)]
#[command(name = "cce-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract all catalog XML files under a directory into one CSV table.
    Extract {
        /// Directory containing catalog XML files (searched recursively)
        input_dir: PathBuf,

        /// Output CSV file path
        #[arg(short, long)]
        output: PathBuf,

        /// Entries registered in or after this year are excluded
        #[arg(short, long, default_value_t = DEFAULT_CUTOFF_YEAR)]
        cutoff_year: i32,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input_dir,
            output,
            cutoff_year,
        } => extract_command(&input_dir, &output, cutoff_year),
    }
}

/// Execute the extract command.
fn extract_command(input_dir: &Path, output: &Path, cutoff_year: i32) -> Result<()> {
    // Validate inputs before touching the filesystem tree
    validate_cutoff_year(cutoff_year)?;

    if !input_dir.exists() {
        return Err(ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input directory does not exist: {}", input_dir.display()),
        )));
    }
    if !input_dir.is_dir() {
        return Err(ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a directory: {}", input_dir.display()),
        )));
    }

    println!(
        "{} {} (cutoff year {})",
        style("Extracting").bold(),
        style(input_dir.display()).cyan(),
        style(cutoff_year).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Scanning corpus...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match run_with_progress(input_dir, output, cutoff_year, |path| {
        pb.set_message(format!("Processing {}", path.display()));
    }) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "  Files processed: {}",
        style(summary.files_processed).green()
    );
    if summary.files_skipped > 0 {
        println!(
            "  Files skipped: {}",
            style(summary.files_skipped).yellow().bold()
        );
    }
    println!("  Rows written: {}", style(summary.records).green());
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}
