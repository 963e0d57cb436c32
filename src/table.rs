//! Tabular output: column union and CSV writing.
//!
//! The table is written once, in full, after the whole corpus has been
//! processed. Columns are the union of all field names seen across every
//! record, in first-seen order; rows missing a column get an empty cell.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::FlatRecord;

/// Union of all field names across records, in first-seen order.
#[must_use]
pub fn column_union(records: &[FlatRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for (name, _) in record.fields() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

/// Write all records as one CSV table.
///
/// Creates parent directories as needed. An empty corpus produces an empty
/// file rather than an error.
///
/// # Arguments
/// * `records` - All accumulated records
/// * `path` - Output file path
pub fn write_csv(records: &[FlatRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let columns = column_union(records);
    if columns.is_empty() {
        fs::File::create(path)?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;
    for record in records {
        let row: Vec<&str> = columns
            .iter()
            .map(|column| record.get(column).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}
