//! Scalar literals and SQL expression trees carried by schema descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::render::literal::{py_float, py_repr};

/// A plain scalar value that renders as a Python literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => write!(f, "None"),
            Literal::Bool(true) => write!(f, "True"),
            Literal::Bool(false) => write!(f, "False"),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{}", py_float(*x)),
            Literal::Str(s) => write!(f, "{}", py_repr(s)),
            Literal::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

/// A SQL expression tree. Stringified by the dialect implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SqlExpr {
    /// Raw SQL text, emitted as-is.
    Text { sql: String },
    Column {
        name: String,
        #[serde(default)]
        table: Option<String>,
    },
    Literal { value: Literal },
    Function {
        name: String,
        #[serde(default)]
        args: Vec<SqlExpr>,
    },
    Binary {
        left: Box<SqlExpr>,
        operator: String,
        right: Box<SqlExpr>,
    },
    Cast {
        expr: Box<SqlExpr>,
        type_name: String,
    },
}

impl SqlExpr {
    pub fn text(sql: impl Into<String>) -> Self {
        SqlExpr::Text { sql: sql.into() }
    }

    pub fn column(name: impl Into<String>) -> Self {
        SqlExpr::Column {
            name: name.into(),
            table: None,
        }
    }

    pub fn function(name: impl Into<String>, args: Vec<SqlExpr>) -> Self {
        SqlExpr::Function {
            name: name.into(),
            args,
        }
    }

    pub fn binary(left: SqlExpr, operator: impl Into<String>, right: SqlExpr) -> Self {
        SqlExpr::Binary {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }
}

/// Either a plain literal or a SQL expression, as found in dialect keyword
/// arguments where both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Expr(SqlExpr),
    Literal(Literal),
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Value::Literal(value)
    }
}

impl From<SqlExpr> for Value {
    fn from(value: SqlExpr) -> Self {
        Value::Expr(value)
    }
}
