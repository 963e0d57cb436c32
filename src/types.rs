//! Core data types for the extractor.

/// Header metadata of one catalog volume document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Catalog year (e.g., 1950).
    pub year: i32,

    /// Volume number within the year.
    pub volume: i32,

    /// Part designation (e.g., "1A"). Kept as text; parts are not numeric.
    pub part: String,
}

/// One flattened output row: a field-name to value mapping.
///
/// Fields keep insertion order so the output table's columns follow
/// first-seen order across the corpus. `insert` overwrites an existing field
/// (attribute merges behave like dictionary updates); the group-author
/// fallback uses [`FlatRecord::insert_if_absent`] so an entry's own author
/// always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    fields: Vec<(String, String)>,
}

impl FlatRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overwriting any existing value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Set a field only if it is not already present.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.fields.push((name, value.into()));
        }
    }

    /// Get a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of one corpus run, for CLI reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files extracted successfully.
    pub files_processed: usize,

    /// Files skipped due to read or parse failures.
    pub files_skipped: usize,

    /// Rows written to the output table.
    pub records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_get() {
        let mut record = FlatRecord::new();
        record.insert("title", "A book.");

        assert_eq!(record.get("title"), Some("A book."));
        assert_eq!(record.get("missing"), None);
        assert!(record.contains("title"));
        assert!(!record.contains("missing"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = FlatRecord::new();
        record.insert("regnum", "A1");
        record.insert("regnum", "A2");

        assert_eq!(record.get("regnum"), Some("A2"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_insert_if_absent_keeps_existing() {
        let mut record = FlatRecord::new();
        record.insert("authorName", "Own, Author");
        record.insert_if_absent("authorName", "Group, Author");

        assert_eq!(record.get("authorName"), Some("Own, Author"));
    }

    #[test]
    fn test_insert_if_absent_fills_missing() {
        let mut record = FlatRecord::new();
        record.insert_if_absent("authorName", "Group, Author");

        assert_eq!(record.get("authorName"), Some("Group, Author"));
    }

    #[test]
    fn test_fields_preserve_insertion_order() {
        let mut record = FlatRecord::new();
        record.insert("year", "1950");
        record.insert("id", "A1");
        record.insert("title", "A book.");

        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["year", "id", "title"]);
    }

    #[test]
    fn test_empty_record() {
        let record = FlatRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }
}
