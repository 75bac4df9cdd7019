//! Table comment operations
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableCommentOp {
    pub table_name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub existing_comment: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTableCommentOp {
    pub table_name: String,
    #[serde(default)]
    pub existing_comment: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}
