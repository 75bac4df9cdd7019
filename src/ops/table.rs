//! Table-level operations
use serde::{Deserialize, Serialize};

use crate::catalog::{MetaData, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableOp {
    #[serde(flatten)]
    pub table: Table,
    /// Tables known to the comparison, used to resolve foreign key targets.
    #[serde(default)]
    pub namespace: MetaData,
}

impl CreateTableOp {
    /// Operation with an empty namespace: no known tables and no default
    /// schema, so foreign key targets render as written.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            namespace: MetaData::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: MetaData) -> Self {
        self.namespace = namespace;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTableOp {
    pub table_name: String,
    #[serde(default)]
    pub schema: Option<String>,
}
