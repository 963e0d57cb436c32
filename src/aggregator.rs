//! Corpus aggregation: enumerate, extract, accumulate, write.
//!
//! A single bad file degrades the output (fewer rows) but never aborts the
//! run; per-file failures are logged and the walk continues.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::XML_EXTENSION;
use crate::error::Result;
use crate::extractor::extract_records;
use crate::table::write_csv;
use crate::types::{FlatRecord, RunSummary};

/// Enumerate all catalog XML files under a directory, recursively.
///
/// Order is filesystem traversal order; the output table has no required row
/// ordering. Unreadable directory entries are logged and skipped.
#[must_use]
pub fn enumerate_corpus(input_dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(true) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == XML_EXTENSION) {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read directory entry (skipping)");
            }
        }
    }

    files
}

/// Run the full corpus extraction and write the output table.
///
/// # Arguments
/// * `input_dir` - Directory containing catalog XML files (searched recursively)
/// * `output_path` - CSV file to write
/// * `cutoff_year` - Entries registered in or after this year are dropped
///
/// # Returns
/// A summary of the run. Only failures writing the final table are fatal.
pub fn run(input_dir: &Path, output_path: &Path, cutoff_year: i32) -> Result<RunSummary> {
    run_with_progress(input_dir, output_path, cutoff_year, |_| {})
}

/// Like [`run`], invoking `on_file` after each file for progress reporting.
pub fn run_with_progress(
    input_dir: &Path,
    output_path: &Path,
    cutoff_year: i32,
    mut on_file: impl FnMut(&Path),
) -> Result<RunSummary> {
    let files = enumerate_corpus(input_dir);
    tracing::info!(count = files.len(), "Enumerated corpus files");

    let mut records: Vec<FlatRecord> = Vec::new();
    let mut files_skipped = 0;

    for path in &files {
        match extract_file(path, cutoff_year) {
            Ok(mut file_records) => {
                tracing::debug!(
                    path = %path.display(),
                    records = file_records.len(),
                    "Extracted file"
                );
                records.append(&mut file_records);
            }
            Err(e) => {
                files_skipped += 1;
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to process file (skipping)"
                );
            }
        }
        on_file(path);
    }

    write_csv(&records, output_path)?;

    Ok(RunSummary {
        files_processed: files.len() - files_skipped,
        files_skipped,
        records: records.len(),
    })
}

/// Read and extract one corpus file.
fn extract_file(path: &Path, cutoff_year: i32) -> Result<Vec<FlatRecord>> {
    let xml = fs::read_to_string(path)?;
    extract_records(&xml, cutoff_year)
}
