//! Column and expression type descriptors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value::Literal;

/// Where a type constructor is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TypeNamespace {
    /// Core `sqlalchemy` types.
    #[default]
    Core,
    /// Vendor types, e.g. `sqlalchemy.dialects.postgresql`.
    Dialect(String),
    /// Types declared in the user's own modules.
    User(String),
}

/// A constructor argument: either a literal or a nested type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeArg {
    Type(Box<TypeDescriptor>),
    Literal(Literal),
}

impl From<Literal> for TypeArg {
    fn from(value: Literal) -> Self {
        TypeArg::Literal(value)
    }
}

impl From<TypeDescriptor> for TypeArg {
    fn from(value: TypeDescriptor) -> Self {
        TypeArg::Type(Box::new(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Plain,
    /// `ARRAY(item_type, ...)`.
    Array { item_type: Box<TypeDescriptor> },
    /// A base type with per-dialect replacements; the descriptor's own
    /// name and arguments are ignored in favor of `base`.
    Variant {
        base: Box<TypeDescriptor>,
        mapping: BTreeMap<String, TypeDescriptor>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(default)]
    pub namespace: TypeNamespace,
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeArg>,
    #[serde(default)]
    pub kwargs: Vec<(String, TypeArg)>,
    #[serde(default)]
    pub kind: TypeKind,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: TypeNamespace::Core,
            name: name.into(),
            args: vec![],
            kwargs: vec![],
            kind: TypeKind::Plain,
        }
    }

    pub fn dialect(dialect: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: TypeNamespace::Dialect(dialect.into()),
            ..Self::new(name)
        }
    }

    pub fn user(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: TypeNamespace::User(module.into()),
            ..Self::new(name)
        }
    }

    pub fn array(item_type: TypeDescriptor) -> Self {
        Self {
            kind: TypeKind::Array {
                item_type: Box::new(item_type),
            },
            ..Self::new("ARRAY")
        }
    }

    pub fn variant(base: TypeDescriptor, mapping: BTreeMap<String, TypeDescriptor>) -> Self {
        Self {
            namespace: base.namespace.clone(),
            kind: TypeKind::Variant {
                base: Box::new(base),
                mapping,
            },
            ..Self::new("Variant")
        }
    }

    pub fn with_arg(mut self, arg: impl Into<TypeArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, arg: impl Into<TypeArg>) -> Self {
        self.kwargs.push((key.into(), arg.into()));
        self
    }

    pub fn in_namespace(mut self, namespace: TypeNamespace) -> Self {
        self.namespace = namespace;
        self
    }
}
