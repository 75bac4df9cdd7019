use serde::{Deserialize, Serialize};

use crate::catalog::SqlExpr;

/// Payload of an `execute` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlPayload {
    Text(String),
    Expr(SqlExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteSqlOp {
    pub sqltext: SqlPayload,
}

impl ExecuteSqlOp {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sqltext: SqlPayload::Text(sql.into()),
        }
    }
}
