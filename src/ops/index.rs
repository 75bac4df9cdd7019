use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{ConstraintName, Index, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndexOp {
    pub index: Index,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropIndexOp {
    pub index_name: ConstraintName,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub kwargs: BTreeMap<String, Value>,
}

impl DropIndexOp {
    pub fn new(index_name: impl Into<String>, table_name: Option<String>) -> Self {
        Self {
            index_name: ConstraintName::Plain(index_name.into()),
            table_name,
            schema: None,
            kwargs: BTreeMap::new(),
        }
    }
}
