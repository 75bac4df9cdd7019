//! Column operations
use serde::{Deserialize, Serialize};

use crate::catalog::{Column, ServerDefault, TypeDescriptor};

/// Intent for an alterable attribute.
///
/// `Cleared` asks for the value to be removed and renders as `None`;
/// `Unchanged` omits the attribute entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Change<T> {
    #[default]
    Unchanged,
    Cleared,
    Set(T),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddColumnOp {
    pub table_name: String,
    pub column: Column,
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropColumnOp {
    pub table_name: String,
    pub column_name: String,
    #[serde(default)]
    pub schema: Option<String>,
}

/// Column alteration. `existing_*` fields describe the column as it is now;
/// they are echoed into the script only where the operation itself does not
/// change the attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterColumnOp {
    pub table_name: String,
    pub column_name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub existing_type: Option<TypeDescriptor>,
    #[serde(default)]
    pub existing_server_default: Option<ServerDefault>,
    #[serde(default)]
    pub existing_nullable: Option<bool>,
    #[serde(default)]
    pub existing_comment: Option<String>,
    #[serde(default)]
    pub modify_type: Option<TypeDescriptor>,
    #[serde(default)]
    pub modify_nullable: Option<bool>,
    #[serde(default)]
    pub modify_server_default: Change<ServerDefault>,
    #[serde(default)]
    pub modify_comment: Change<String>,
    #[serde(default)]
    pub autoincrement: Option<bool>,
}

impl AlterColumnOp {
    pub fn new(table_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            schema: None,
            existing_type: None,
            existing_server_default: None,
            existing_nullable: None,
            existing_comment: None,
            modify_type: None,
            modify_nullable: None,
            modify_server_default: Change::Unchanged,
            modify_comment: Change::Unchanged,
            autoincrement: None,
        }
    }
}
