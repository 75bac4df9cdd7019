//! Constraint descriptors
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::value::SqlExpr;

/* ---------- Names ---------- */

/// A constraint or index name.
///
/// Convention names were produced by a naming convention and are rendered
/// through `op.f()` so the convention is not applied a second time when the
/// migration runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintName {
    Plain(String),
    Convention(String),
}

impl ConstraintName {
    pub fn as_str(&self) -> &str {
        match self {
            ConstraintName::Plain(name) | ConstraintName::Convention(name) => name,
        }
    }
}

impl From<&str> for ConstraintName {
    fn from(value: &str) -> Self {
        ConstraintName::Plain(value.to_string())
    }
}

/* ---------- Constraint kinds ---------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PrimaryKeyConstraint {
    #[serde(default)]
    pub name: Option<ConstraintName>,
    #[serde(default)]
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyElement {
    /// Local column the key is declared on.
    pub parent_column: String,
    /// Target column spec, `table.column` or `schema.table.column`.
    pub target: String,
    /// When set, `target` already names the remote column and no key lookup
    /// is performed.
    #[serde(default)]
    pub link_to_name: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ForeignKeyConstraint {
    #[serde(default)]
    pub name: Option<ConstraintName>,
    #[serde(default)]
    pub elements: Vec<ForeignKeyElement>,
    #[serde(default)]
    pub onupdate: Option<String>,
    #[serde(default)]
    pub ondelete: Option<String>,
    #[serde(default)]
    pub deferrable: Option<bool>,
    #[serde(default)]
    pub initially: Option<String>,
    #[serde(default)]
    pub use_alter: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UniqueConstraint {
    #[serde(default)]
    pub name: Option<ConstraintName>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub deferrable: Option<bool>,
    #[serde(default)]
    pub initially: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConstraint {
    #[serde(default)]
    pub name: Option<ConstraintName>,
    pub sqltext: SqlExpr,
    /// Set when the constraint was emitted by a column type (e.g. a
    /// non-native boolean or enum) rather than declared on the table.
    #[serde(default)]
    pub created_by_type: bool,
}

/// A constraint kind this crate has no renderer for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueObject {
    pub kind: String,
    pub repr: String,
}

impl OpaqueObject {
    /// Stand-in for a tagged object whose tag is not recognised. An explicit
    /// `repr` field is kept as is; otherwise the object's own text is used.
    pub fn from_unknown(kind: impl Into<String>, value: &serde_json::Value) -> Self {
        let repr = match value.get("repr").and_then(serde_json::Value::as_str) {
            Some(repr) => repr.to_string(),
            None => value.to_string(),
        };
        Self {
            kind: kind.into(),
            repr,
        }
    }
}

impl fmt::Display for OpaqueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

/// Deserialize an internally tagged object whose set of tags may grow.
///
/// Objects carrying one of the `known` tags go through `parse`; any other
/// tag becomes an [`OpaqueObject`] handed to `other`.
pub(crate) fn deserialize_open_tagged<'de, D, T>(
    deserializer: D,
    tag: &'static str,
    known: &[&str],
    parse: impl FnOnce(serde_json::Value) -> Result<T, serde_json::Error>,
    other: impl FnOnce(OpaqueObject) -> T,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let kind = value
        .get(tag)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| D::Error::missing_field(tag))?;

    if known.contains(&kind) {
        parse(value).map_err(D::Error::custom)
    } else {
        Ok(other(OpaqueObject::from_unknown(kind, &value)))
    }
}

const CONSTRAINT_KINDS: &[&str] = &["primary_key", "foreign_key", "unique", "check", "other"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    PrimaryKey(PrimaryKeyConstraint),
    ForeignKey(ForeignKeyConstraint),
    Unique(UniqueConstraint),
    Check(CheckConstraint),
    Other(OpaqueObject),
}

impl Serialize for Constraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Constraint::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_open_tagged(
            deserializer,
            "type",
            CONSTRAINT_KINDS,
            |value| Constraint::deserialize(value),
            Constraint::Other,
        )
    }
}

/// Constraint type names accepted by `drop_constraint(type_=...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintType {
    Foreignkey,
    Primary,
    Unique,
    Check,
}

impl ConstraintType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintType::Foreignkey => "foreignkey",
            ConstraintType::Primary => "primary",
            ConstraintType::Unique => "unique",
            ConstraintType::Check => "check",
        }
    }
}
