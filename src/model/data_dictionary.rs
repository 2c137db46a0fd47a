//! Data dictionary representation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ColumnDescriptor;

/// Columns of one table, in declaration order
pub type TableColumns = IndexMap<String, ColumnDescriptor>;

/// The complete data dictionary: table name -> column name -> descriptor.
///
/// Tables keep first-occurrence order. Re-inserting an existing table
/// replaces its columns without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataDictionary {
    tables: IndexMap<String, TableColumns>,
}

impl DataDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a table. Returns the previous columns if the name was already present.
    pub fn insert_table(
        &mut self,
        name: impl Into<String>,
        columns: TableColumns,
    ) -> Option<TableColumns> {
        self.tables.insert(name.into(), columns)
    }

    pub fn table(&self, name: &str) -> Option<&TableColumns> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Iterate tables in dictionary order
    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableColumns)> {
        self.tables.iter().map(|(name, cols)| (name.as_str(), cols))
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn first_table(&self) -> Option<(&str, &TableColumns)> {
        self.tables.first().map(|(name, cols)| (name.as_str(), cols))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Total number of columns across all tables
    pub fn column_count(&self) -> usize {
        self.tables.values().map(|cols| cols.len()).sum()
    }
}
