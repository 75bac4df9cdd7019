//! Schema object descriptors consumed by the renderers.
//!
//! These are read-only value types produced upstream by schema comparison.
//! Rendering never mutates them.

pub mod constraint;
pub mod default;
pub mod index;
pub mod namespace;
pub mod table;
pub mod types;
pub mod value;

pub use constraint::{
    CheckConstraint, Constraint, ConstraintName, ConstraintType, ForeignKeyConstraint,
    ForeignKeyElement, OpaqueObject, PrimaryKeyConstraint, UniqueConstraint,
};
pub use default::{Computed, Identity, ServerDefault};
pub use index::{Index, IndexElement};
pub use namespace::{MetaData, SchemaNamespace};
pub use table::{Autoincrement, Column, Table};
pub use types::{TypeArg, TypeDescriptor, TypeKind, TypeNamespace};
pub use value::{Literal, SqlExpr, Value};
