// file: src/models/catalog.rs
// description: immutable record collection with id lookup for cross references
// reference: internal data structures

use crate::models::SourceRecord;
use std::collections::HashMap;

/// Loaded records in processing order plus an id index.
///
/// Duplicate ids resolve to the first record carrying them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<SourceRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<SourceRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(id) = &record.id {
                by_id.entry(id.clone()).or_insert(index);
            }
        }

        Self { records, by_id }
    }

    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SourceRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Display name for `id`, falling back to the id itself when the record
    /// is missing or unnamed.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id)
            .and_then(|record| record.name.as_deref())
            .unwrap_or(id)
    }

    /// Records ordered by name; ties keep processing order.
    pub fn sorted_by_name(&self) -> Vec<&SourceRecord> {
        let mut sorted: Vec<&SourceRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.name_str().cmp(b.name_str()));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: &str, name: Option<&str>) -> SourceRecord {
        SourceRecord {
            id: Some(id.to_string()),
            name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_and_display_name() {
        let catalog = Catalog::new(vec![
            source("usage", Some("Usage Data")),
            source("anon", None),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("usage"));
        assert_eq!(catalog.display_name("usage"), "Usage Data");
        assert_eq!(catalog.display_name("anon"), "anon");
        assert_eq!(catalog.display_name("missing"), "missing");
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let catalog = Catalog::new(vec![
            source("dup", Some("First")),
            source("dup", Some("Second")),
        ]);

        assert_eq!(catalog.display_name("dup"), "First");
    }

    #[test]
    fn test_sorted_by_name_is_stable() {
        let catalog = Catalog::new(vec![
            source("c", Some("Zeta")),
            source("a", Some("Alpha")),
            source("b", Some("Alpha")),
            source("d", None),
        ]);

        let ids: Vec<&str> = catalog.sorted_by_name().iter().map(|r| r.id_str()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }
}
