//! Table and column descriptors
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constraint::Constraint;
use super::default::ServerDefault;
use super::types::TypeDescriptor;
use super::value::{Literal, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Autoincrement {
    /// Library default; never rendered.
    #[default]
    Auto,
    Enabled,
    Disabled,
    IgnoreFk,
}

impl Autoincrement {
    pub fn to_literal(self) -> Option<Literal> {
        match self {
            Autoincrement::Auto => None,
            Autoincrement::Enabled => Some(Literal::Bool(true)),
            Autoincrement::Disabled => Some(Literal::Bool(false)),
            Autoincrement::IgnoreFk => Some(Literal::from("ignore_fk")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TypeDescriptor,
    #[serde(default)]
    pub nullable: Option<bool>,
    #[serde(default)]
    pub server_default: Option<ServerDefault>,
    #[serde(default)]
    pub autoincrement: Autoincrement,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub system: bool,
    /// Dialect-prefixed keyword arguments such as `mysql_charset`.
    #[serde(default)]
    pub dialect_kwargs: BTreeMap<String, Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_,
            nullable: None,
            server_default: None,
            autoincrement: Autoincrement::Auto,
            comment: None,
            system: false,
            dialect_kwargs: BTreeMap::new(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn server_default(mut self, default: ServerDefault) -> Self {
        self.server_default = Some(default);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Statement prefixes such as `TEMPORARY`.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Extra table keyword arguments such as `mysql_engine`.
    #[serde(default)]
    pub kwargs: BTreeMap<String, Literal>,
}

impl Table {
    pub fn new(name: impl Into<String>, schema: Option<String>) -> Self {
        Self {
            name: name.into(),
            schema,
            columns: vec![],
            constraints: vec![],
            comment: None,
            prefixes: vec![],
            kwargs: BTreeMap::new(),
        }
    }

    /// `schema.name`, or just `name` when no schema is set.
    pub fn fullname(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }
}
