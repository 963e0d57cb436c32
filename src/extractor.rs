//! Entry extraction from a single catalog document.
//!
//! A document is one digitized catalog volume: a `header` block followed by
//! an ordered mix of `page` markers, `entryGroup` containers, and standalone
//! `copyrightEntry` elements. Extraction walks the top-level children once,
//! in document order, and emits one flat record per entry that survives the
//! registration-year cutoff.

use chrono::{Datelike, NaiveDate};
use roxmltree::{Document, Node};

use crate::config::{ENTRY_FIELD_PATHS, REG_DATE_FORMAT};
use crate::error::{ExtractorError, Result};
use crate::types::{DocumentHeader, FlatRecord};
use crate::xml::{element_children, find_by_path, find_child, get_tag_name, get_text};

/// Extract all flat records from one catalog XML document.
///
/// # Arguments
/// * `xml` - Raw XML content of the document
/// * `cutoff_year` - Entries registered in or after this year are dropped
///
/// # Returns
/// All surviving records, in document order. Fails if the document cannot be
/// parsed or its `header` block is missing or malformed; the aggregator
/// treats either as a skip-this-file condition.
pub fn extract_records(xml: &str, cutoff_year: i32) -> Result<Vec<FlatRecord>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let header = parse_header(root)?;

    let mut records = Vec::new();
    // Most recent page marker among the root's direct children
    let mut current_page = String::new();

    for child in element_children(root) {
        match get_tag_name(child) {
            "page" => {
                if let Some(pgnum) = child.attribute("pgnum") {
                    current_page = pgnum.to_string();
                }
            }
            "entryGroup" => {
                extract_group(child, &header, &current_page, cutoff_year, &mut records);
            }
            "copyrightEntry" => {
                if let Some(record) = extract_entry(child, &header, &current_page, cutoff_year) {
                    records.push(record);
                }
            }
            _ => {}
        }
    }

    Ok(records)
}

/// Parse the document `header` block.
fn parse_header(root: Node<'_, '_>) -> Result<DocumentHeader> {
    let header = find_child(root, "header").ok_or_else(|| ExtractorError::MissingElement {
        element: "header".to_string(),
        context: get_tag_name(root).to_string(),
    })?;

    let year = header_int_field(header, "year")?;
    let volume = header_int_field(header, "volume")?;
    let part = find_child(header, "part")
        .map(get_text)
        .ok_or_else(|| ExtractorError::MissingElement {
            element: "part".to_string(),
            context: "header".to_string(),
        })?;

    Ok(DocumentHeader { year, volume, part })
}

/// Read an integer header field.
fn header_int_field(header: Node<'_, '_>, field: &str) -> Result<i32> {
    let node = find_child(header, field).ok_or_else(|| ExtractorError::MissingElement {
        element: field.to_string(),
        context: "header".to_string(),
    })?;
    let text = get_text(node);
    text.parse().map_err(|_| ExtractorError::InvalidHeaderField {
        field: field.to_string(),
        value: text.clone(),
    })
}

/// Extract all entries nested in one `entryGroup`.
///
/// The group's author (first `author/authorName`, if any) supplies a fallback
/// `authorName` for nested entries that lack their own. Nested entries are
/// only ever reached through their group, so they cannot be emitted a second
/// time as top-level records.
fn extract_group(
    group: Node<'_, '_>,
    header: &DocumentHeader,
    page: &str,
    cutoff_year: i32,
    records: &mut Vec<FlatRecord>,
) {
    let group_author = find_by_path(group, "author/authorName")
        .map(get_text)
        .filter(|s| !s.is_empty());

    for member in element_children(group) {
        match get_tag_name(member) {
            "copyrightEntry" => {
                if let Some(mut record) = extract_entry(member, header, page, cutoff_year) {
                    if let Some(author) = &group_author {
                        record.insert_if_absent("authorName", author.clone());
                    }
                    records.push(record);
                }
            }
            // Page markers below the document root do not update page
            // tracking; see the tie-break note in DESIGN.md.
            "page" => {
                tracing::debug!(
                    pgnum = member.attribute("pgnum").unwrap_or(""),
                    "Ignoring page marker nested inside entryGroup"
                );
            }
            _ => {}
        }
    }
}

/// Extract one `copyrightEntry` into a flat record.
///
/// Returns `None` when the entry's registration date parses to a year at or
/// past the cutoff. An unparseable date is logged and never filters.
fn extract_entry(
    entry: Node<'_, '_>,
    header: &DocumentHeader,
    page: &str,
    cutoff_year: i32,
) -> Option<FlatRecord> {
    let mut record = FlatRecord::new();

    // Document metadata first, so these columns lead the table
    record.insert("year", header.year.to_string());
    record.insert("volume", header.volume.to_string());
    record.insert("part", header.part.clone());
    if !page.is_empty() {
        record.insert("page", page);
    }

    if let Some(id) = entry.attribute("id") {
        record.insert("id", id);
    }
    if let Some(regnum) = entry.attribute("regnum") {
        record.insert("regnum", regnum);
    }

    for &(column, path) in ENTRY_FIELD_PATHS {
        let Some(node) = find_by_path(entry, path) else {
            continue;
        };

        if column == "regDate" {
            // The raw `date` attribute enters the record here
            for attr in node.attributes() {
                record.insert(attr.name(), attr.value());
            }
            if registered_past_cutoff(node.attribute("date"), cutoff_year, entry) {
                return None;
            }
        }

        let text = get_text(node);
        if !text.is_empty() {
            record.insert(column, text);
        }
    }

    Some(record)
}

/// Cutoff test for a registration date attribute.
///
/// Missing attributes never filter. Unparseable values are logged and never
/// filter.
fn registered_past_cutoff(date: Option<&str>, cutoff_year: i32, entry: Node<'_, '_>) -> bool {
    let Some(raw) = date else {
        return false;
    };

    match NaiveDate::parse_from_str(raw, REG_DATE_FORMAT) {
        Ok(parsed) => parsed.year() >= cutoff_year,
        Err(_) => {
            tracing::warn!(
                date = raw,
                entry_id = entry.attribute("id").unwrap_or(""),
                "Unparseable registration date, record kept"
            );
            false
        }
    }
}
