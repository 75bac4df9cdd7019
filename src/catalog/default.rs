//! Server-side defaults: plain defaults, computed columns, identity columns.

use serde::{Deserialize, Serialize};

use super::value::SqlExpr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServerDefault {
    /// A literal default string as reflected, possibly still wrapped in
    /// single quotes.
    Text { value: String },
    /// A default given as a SQL expression.
    Expr { expr: SqlExpr },
    Computed(Computed),
    Identity(Identity),
}

impl ServerDefault {
    pub fn text(value: impl Into<String>) -> Self {
        ServerDefault::Text {
            value: value.into(),
        }
    }

    pub fn expr(expr: SqlExpr) -> Self {
        ServerDefault::Expr { expr }
    }

    /// Computed and identity defaults are passed as positional `Column`
    /// arguments rather than as `server_default=`.
    pub fn is_positional(&self) -> bool {
        matches!(self, ServerDefault::Computed(_) | ServerDefault::Identity(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computed {
    pub sqltext: SqlExpr,
    #[serde(default)]
    pub persisted: Option<bool>,
}

/// Identity column options. `always` is not optional: `false` and
/// "unspecified" mean different things to the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Identity {
    #[serde(default)]
    pub always: bool,
    #[serde(default)]
    pub on_null: Option<bool>,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub increment: Option<i64>,
    #[serde(default)]
    pub minvalue: Option<i64>,
    #[serde(default)]
    pub maxvalue: Option<i64>,
    #[serde(default)]
    pub nominvalue: Option<bool>,
    #[serde(default)]
    pub nomaxvalue: Option<bool>,
    #[serde(default)]
    pub cycle: Option<bool>,
    #[serde(default)]
    pub cache: Option<i64>,
    #[serde(default)]
    pub order: Option<bool>,
}
