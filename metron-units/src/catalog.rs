//! Append-only catalogs with last-write-wins shadowing
//!
//! Each catalog keeps every appended record in load order and a name index
//! that a later append overwrites. Enumeration sees all records, shadowed
//! ones included; named lookup always resolves to the last append, which
//! reproduces the effective view of a linear last-match-wins scan with O(1)
//! lookups.

use crate::record::{CategoryRecord, UnitRecord};
use metron_core::Dimension;
use std::collections::HashMap;

/// The effective table of unit records.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    records: Vec<UnitRecord>,
    index: HashMap<String, usize>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. The name and the category foreign key are trimmed
    /// (category names are trimmed on their side too, so the key stays
    /// resolvable); a duplicate name shadows every earlier record with that
    /// name for named lookups.
    pub fn append(&mut self, mut record: UnitRecord) {
        let trimmed = record.name.trim();
        if trimmed.len() != record.name.len() {
            record.name = trimmed.to_string();
        }
        let trimmed = record.category.trim();
        if trimmed.len() != record.category.len() {
            record.category = trimmed.to_string();
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
    }

    /// Look up the effective (last appended) record with this exact name.
    pub fn get(&self, name: &str) -> Option<&UnitRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// All stored record names in load order, shadowed duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Names of all stored records in the given category, in load order.
    /// Not deduplicated. Unknown categories yield an empty list.
    pub fn in_category(&self, category: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The effective table of category records.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    records: Vec<CategoryRecord>,
    index: HashMap<String, usize>,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, mut record: CategoryRecord) {
        let trimmed = record.name.trim();
        if trimmed.len() != record.name.len() {
            record.name = trimmed.to_string();
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
    }

    /// Look up the effective (last appended) record with this exact name.
    pub fn get(&self, name: &str) -> Option<&CategoryRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Find the SI unit of the category whose dimension matches the
    /// argument, physical axes only (the currency axis is ignored by
    /// [`Dimension::matches`]).
    ///
    /// Scans the whole table, shadowed records included, and keeps the last
    /// match.
    pub fn si_unit_for_dimension(&self, dimension: &Dimension) -> Option<&str> {
        let mut found = None;
        for record in &self.records {
            if record.dimension.matches(dimension) {
                found = Some(record.si_unit.as_str());
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, category: &str, times: f64) -> UnitRecord {
        UnitRecord {
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            times,
            plus: 0.0,
        }
    }

    fn category(name: &str, si_unit: &str, dimension: Dimension) -> CategoryRecord {
        CategoryRecord {
            name: name.to_string(),
            display_unit: String::new(),
            si_unit: si_unit.to_string(),
            dimension,
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mut catalog = UnitCatalog::new();
        catalog.append(unit("bar", "Pressure", 100000.0));
        catalog.append(unit("bar", "Pressure", 99999.0));

        assert_eq!(catalog.get("bar").unwrap().times, 99999.0);
    }

    #[test]
    fn test_names_keep_shadowed_records() {
        let mut catalog = UnitCatalog::new();
        catalog.append(unit("bar", "Pressure", 100000.0));
        catalog.append(unit("Pa", "Pressure", 1.0));
        catalog.append(unit("bar", "Pressure", 99999.0));

        assert_eq!(catalog.names(), vec!["bar", "Pa", "bar"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut catalog = UnitCatalog::new();
        catalog.append(unit("  bar ", "Pressure", 100000.0));

        assert!(catalog.get("bar").is_some());
        assert!(catalog.get("  bar ").is_none());
    }

    #[test]
    fn test_category_key_is_trimmed() {
        let mut catalog = UnitCatalog::new();
        catalog.append(unit("bar", " Pressure ", 100000.0));

        assert_eq!(catalog.get("bar").unwrap().category, "Pressure");
        assert_eq!(catalog.in_category("Pressure"), vec!["bar"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut catalog = UnitCatalog::new();
        catalog.append(unit("Pa", "Pressure", 1.0));

        assert!(catalog.get("Pa").is_some());
        assert!(catalog.get("pa").is_none());
    }

    #[test]
    fn test_in_category_order_and_duplicates() {
        let mut catalog = UnitCatalog::new();
        catalog.append(unit("bar", "Pressure", 100000.0));
        catalog.append(unit("m", "Length", 1.0));
        catalog.append(unit("bar", "Pressure", 99999.0));

        assert_eq!(catalog.in_category("Pressure"), vec!["bar", "bar"]);
        assert!(catalog.in_category("Nonsense").is_empty());
    }

    #[test]
    fn test_si_unit_for_dimension_last_match() {
        let mut catalog = CategoryCatalog::new();
        catalog.append(category("Pressure", "Pa", Dimension::PRESSURE));
        catalog.append(category("Stress", "N/m2", Dimension::PRESSURE));

        // Both share the pressure dimension; the last appended wins.
        assert_eq!(
            catalog.si_unit_for_dimension(&Dimension::PRESSURE),
            Some("N/m2")
        );
        assert_eq!(catalog.si_unit_for_dimension(&Dimension::ENERGY), None);
    }

    #[test]
    fn test_category_shadowing() {
        let mut catalog = CategoryCatalog::new();
        catalog.append(category("Pressure", "Pa", Dimension::PRESSURE));
        catalog.append(category("Pressure", "kPa", Dimension::PRESSURE));

        assert_eq!(catalog.get("Pressure").unwrap().si_unit, "kPa");
        assert_eq!(catalog.len(), 2);
    }
}
