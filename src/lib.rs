//! CCE Extractor - Flatten copyright registration entries into a CSV table.
//!
//! This crate reads the digitized *Catalog of Copyright Entries* XML corpus,
//! extracts one flat record per surviving registration entry, and writes all
//! records across the corpus as a single CSV table. Entries registered in or
//! after a configurable cutoff year (default 1964) are excluded.
//!
//! # Example
//!
//! ```
//! use cce_extractor::extractor::extract_records;
//!
//! let xml = r#"<copyrightEntries>
//!     <header><year>1950</year><volume>4</volume><part>1A</part></header>
//!     <page pgnum="12"/>
//!     <copyrightEntry id="A41423" regnum="A41423">
//!         <title>An example title.</title>
//!     </copyrightEntry>
//! </copyrightEntries>"#;
//!
//! let records = extract_records(xml, 1964).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].get("title"), Some("An example title."));
//! assert_eq!(records[0].get("page"), Some("12"));
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (DocumentHeader, FlatRecord, RunSummary)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities
//! - [`extractor`]: Per-document entry extraction
//! - [`aggregator`]: Corpus enumeration and accumulation
//! - [`table`]: Column union and CSV output
//! - [`cli`]: Command-line interface

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod table;
pub mod types;
pub mod xml;

// Re-export main functions
pub use aggregator::run;
pub use extractor::extract_records;

// Re-export commonly used items
pub use config::{validate_cutoff_year, DEFAULT_CUTOFF_YEAR};
pub use error::{ExtractorError, Result};
pub use types::{DocumentHeader, FlatRecord, RunSummary};
