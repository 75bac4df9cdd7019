//! Constraint operations for migrations
use serde::{Deserialize, Serialize};

use crate::catalog::{ConstraintName, ConstraintType, SqlExpr, UniqueConstraint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUniqueConstraintOp {
    pub table_name: String,
    #[serde(default)]
    pub schema: Option<String>,
    pub constraint: UniqueConstraint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateForeignKeyOp {
    #[serde(default)]
    pub constraint_name: Option<ConstraintName>,
    pub source_table: String,
    pub referent_table: String,
    pub local_cols: Vec<String>,
    pub remote_cols: Vec<String>,
    #[serde(default)]
    pub source_schema: Option<String>,
    #[serde(default)]
    pub referent_schema: Option<String>,
    #[serde(default)]
    pub onupdate: Option<String>,
    #[serde(default)]
    pub ondelete: Option<String>,
    #[serde(default)]
    pub initially: Option<String>,
    #[serde(default)]
    pub deferrable: Option<bool>,
    #[serde(default)]
    pub use_alter: Option<bool>,
}

impl CreateForeignKeyOp {
    pub fn new(
        constraint_name: Option<ConstraintName>,
        source_table: impl Into<String>,
        referent_table: impl Into<String>,
        local_cols: Vec<String>,
        remote_cols: Vec<String>,
    ) -> Self {
        Self {
            constraint_name,
            source_table: source_table.into(),
            referent_table: referent_table.into(),
            local_cols,
            remote_cols,
            source_schema: None,
            referent_schema: None,
            onupdate: None,
            ondelete: None,
            initially: None,
            deferrable: None,
            use_alter: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePrimaryKeyOp {
    #[serde(default)]
    pub constraint_name: Option<ConstraintName>,
    pub table_name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckConstraintOp {
    #[serde(default)]
    pub constraint_name: Option<ConstraintName>,
    pub table_name: String,
    pub condition: SqlExpr,
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropConstraintOp {
    pub constraint_name: ConstraintName,
    pub table_name: String,
    #[serde(default)]
    pub constraint_type: Option<ConstraintType>,
    #[serde(default)]
    pub schema: Option<String>,
}
