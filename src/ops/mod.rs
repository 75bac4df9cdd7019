//! Migration operations
//!
//! Every schema change in a migration is one `MigrateOperation`. Table-scoped
//! changes may be grouped under a `ModifyTableOps` container, which is the
//! only operation that holds other operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::OpaqueObject;
use crate::catalog::constraint::deserialize_open_tagged;

pub use column::*;
pub use comments::*;
pub use constraint::*;
pub use container::*;
pub use index::*;
pub use sql::*;
pub use table::*;

pub mod column;
pub mod comments;
pub mod constraint;
pub mod container;
pub mod index;
pub mod sql;
pub mod table;

/// Tags of every operation kind with a renderer, plus the explicit `other`.
const OPERATION_KINDS: &[&str] = &[
    "create_table",
    "drop_table",
    "create_index",
    "drop_index",
    "create_unique_constraint",
    "create_foreign_key",
    "create_primary_key",
    "create_check_constraint",
    "drop_constraint",
    "add_column",
    "drop_column",
    "alter_column",
    "create_table_comment",
    "drop_table_comment",
    "execute",
    "modify_table_ops",
    "other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MigrateOperation {
    CreateTable(CreateTableOp),
    DropTable(DropTableOp),
    CreateIndex(CreateIndexOp),
    DropIndex(DropIndexOp),
    CreateUniqueConstraint(CreateUniqueConstraintOp),
    CreateForeignKey(CreateForeignKeyOp),
    CreatePrimaryKey(CreatePrimaryKeyOp),
    CreateCheckConstraint(CreateCheckConstraintOp),
    DropConstraint(DropConstraintOp),
    AddColumn(AddColumnOp),
    DropColumn(DropColumnOp),
    AlterColumn(AlterColumnOp),
    CreateTableComment(CreateTableCommentOp),
    DropTableComment(DropTableCommentOp),
    #[serde(rename = "execute")]
    ExecuteSql(ExecuteSqlOp),
    ModifyTableOps(ModifyTableOps),
    /// An operation kind produced by a newer comparison stage.
    Other(OpaqueObject),
}

impl Serialize for MigrateOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MigrateOperation::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for MigrateOperation {
    /// Unrecognised `op` tags become [`MigrateOperation::Other`] so the rest
    /// of the script still renders.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_open_tagged(
            deserializer,
            "op",
            OPERATION_KINDS,
            |value| MigrateOperation::deserialize(value),
            MigrateOperation::Other,
        )
    }
}

impl MigrateOperation {
    /// Stable name of the operation kind, used in log and error messages.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::CreateTable(_) => "create_table",
            Self::DropTable(_) => "drop_table",
            Self::CreateIndex(_) => "create_index",
            Self::DropIndex(_) => "drop_index",
            Self::CreateUniqueConstraint(_) => "create_unique_constraint",
            Self::CreateForeignKey(_) => "create_foreign_key",
            Self::CreatePrimaryKey(_) => "create_primary_key",
            Self::CreateCheckConstraint(_) => "create_check_constraint",
            Self::DropConstraint(_) => "drop_constraint",
            Self::AddColumn(_) => "add_column",
            Self::DropColumn(_) => "drop_column",
            Self::AlterColumn(_) => "alter_column",
            Self::CreateTableComment(_) => "create_table_comment",
            Self::DropTableComment(_) => "drop_table_comment",
            Self::ExecuteSql(_) => "execute",
            Self::ModifyTableOps(_) => "modify_table_ops",
            Self::Other(obj) => &obj.kind,
        }
    }
}
