//! Known-table lookup used to resolve foreign key targets.
//!
//! A foreign key may be declared against a column's attribute key, which can
//! differ from the column's database name. When the referenced table is known
//! the rendered target uses the database name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Table and column existence queries by qualified name.
pub trait SchemaNamespace {
    /// Schema applied to unqualified table references.
    fn default_schema(&self) -> Option<&str>;

    fn has_table(&self, fullname: &str) -> bool;

    /// Database name of the column with the given key, if both the table and
    /// the column are known.
    fn column_name(&self, table_fullname: &str, column_key: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TableRef {
    #[serde(default)]
    pub columns: Vec<ColumnRef>,
}

/// In-memory namespace of tables keyed by full name (`schema.table`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetaData {
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub tables: BTreeMap<String, TableRef>,
}

impl MetaData {
    pub fn new(schema: Option<String>) -> Self {
        Self {
            schema,
            tables: BTreeMap::new(),
        }
    }

    /// Register a table with `(key, name)` column pairs.
    pub fn add_table(&mut self, fullname: impl Into<String>, columns: &[(&str, &str)]) {
        let columns = columns
            .iter()
            .map(|(key, name)| ColumnRef {
                key: key.to_string(),
                name: name.to_string(),
            })
            .collect();
        self.tables.insert(fullname.into(), TableRef { columns });
    }
}

impl SchemaNamespace for MetaData {
    fn default_schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    fn has_table(&self, fullname: &str) -> bool {
        self.tables.contains_key(fullname)
    }

    fn column_name(&self, table_fullname: &str, column_key: &str) -> Option<&str> {
        self.tables
            .get(table_fullname)?
            .columns
            .iter()
            .find(|c| c.key == column_key)
            .map(|c| c.name.as_str())
    }
}
