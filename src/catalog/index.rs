//! Index descriptors
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constraint::ConstraintName;
use super::value::{SqlExpr, Value};

/// One indexed element: a plain column or a functional expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexElement {
    Column(String),
    Expr(SqlExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    #[serde(default)]
    pub name: Option<ConstraintName>,
    pub table_name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub elements: Vec<IndexElement>,
    #[serde(default)]
    pub unique: bool,
    /// Dialect options such as `postgresql_using` or `postgresql_where`.
    #[serde(default)]
    pub kwargs: BTreeMap<String, Value>,
}

impl Index {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: Some(ConstraintName::Plain(name.into())),
            table_name: table_name.into(),
            schema: None,
            elements: vec![],
            unique: false,
            kwargs: BTreeMap::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.elements.push(IndexElement::Column(name.into()));
        self
    }
}
