//! Configuration constants and validation functions for the extractor.

use crate::error::{ExtractorError, Result};

/// File extension recognized during corpus enumeration.
pub const XML_EXTENSION: &str = "xml";

/// Default registration-year cutoff.
///
/// Entries whose registration date falls in or after this year are excluded
/// from the output table.
pub const DEFAULT_CUTOFF_YEAR: i32 = 1964;

/// Date format of the `date` attribute on `regDate` elements.
pub const REG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed per-entry field paths: output column name and the relative element
/// path under `copyrightEntry` it is read from. The first matching element in
/// document order wins.
pub const ENTRY_FIELD_PATHS: &[(&str, &str)] = &[
    ("authorName", "author/authorName"),
    ("title", "title"),
    ("pubName", "publisher/pubName"),
    ("pubPlace", "publisher/pubPlace"),
    ("regDate", "regDate"),
    ("regNum", "regNum"),
    ("prevPub", "prevPub"),
    ("prevRegNum", "prevRegNum"),
    ("edition", "edition"),
];

/// Validate a cutoff year.
///
/// The catalog spans the 20th century; any four-digit year is accepted.
///
/// # Arguments
/// * `year` - The cutoff year to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ExtractorError::InvalidCutoffYear)` if invalid
///
/// # Examples
/// ```
/// use cce_extractor::config::validate_cutoff_year;
///
/// assert!(validate_cutoff_year(1964).is_ok());
/// assert!(validate_cutoff_year(64).is_err());
/// assert!(validate_cutoff_year(-1964).is_err());
/// ```
pub fn validate_cutoff_year(year: i32) -> Result<()> {
    if (1000..=9999).contains(&year) {
        Ok(())
    } else {
        Err(ExtractorError::InvalidCutoffYear(year))
    }
}
