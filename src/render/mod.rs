//! Python rendering of migration operations.
//!
//! Every operation type implements [`ScriptRenderer`]; [`MigrateOperation`]
//! dispatches to the implementation for its variant.

pub mod column;
pub mod comment;
pub mod constraint;
pub mod context;
pub mod execute;
pub mod expr;
pub mod index;
pub mod literal;
pub mod printer;
pub mod script;
pub mod table;
pub mod types;

pub use context::{BatchScope, ItemKind, RenderContext, RenderItem, RenderItemHook};
pub use script::{
    render_cmd_body, render_migration_module, render_python_code, render_template_vars,
};

use tracing::{debug, warn};

use crate::error::{RenderError, RenderResult};
use crate::ops::MigrateOperation;

/// Render an operation to lines of Python source.
pub trait ScriptRenderer {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>>;
}

impl ScriptRenderer for MigrateOperation {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        debug!("Rendering {} operation", self.kind_name());
        match self {
            MigrateOperation::CreateTable(op) => op.render(ctx),
            MigrateOperation::DropTable(op) => op.render(ctx),
            MigrateOperation::CreateIndex(op) => op.render(ctx),
            MigrateOperation::DropIndex(op) => op.render(ctx),
            MigrateOperation::CreateUniqueConstraint(op) => op.render(ctx),
            MigrateOperation::CreateForeignKey(op) => op.render(ctx),
            MigrateOperation::CreatePrimaryKey(op) => op.render(ctx),
            MigrateOperation::CreateCheckConstraint(op) => op.render(ctx),
            MigrateOperation::DropConstraint(op) => op.render(ctx),
            MigrateOperation::AddColumn(op) => op.render(ctx),
            MigrateOperation::DropColumn(op) => op.render(ctx),
            MigrateOperation::AlterColumn(op) => op.render(ctx),
            MigrateOperation::CreateTableComment(op) => op.render(ctx),
            MigrateOperation::DropTableComment(op) => op.render(ctx),
            MigrateOperation::ExecuteSql(op) => op.render(ctx),
            MigrateOperation::ModifyTableOps(op) => op.render(ctx),
            MigrateOperation::Other(obj) => {
                if ctx.opts.strict_dispatch {
                    return Err(RenderError::NoRenderer {
                        kind: obj.kind.clone(),
                    });
                }
                warn!("No renderer is established for object {}", obj);
                Ok(vec![format!("# [Unknown Python object {}]", obj)])
            }
        }
    }
}

pub fn render_op(ctx: &mut RenderContext, op: &MigrateOperation) -> RenderResult<Vec<String>> {
    op.render(ctx)
}

pub fn render_op_text(ctx: &mut RenderContext, op: &MigrateOperation) -> RenderResult<String> {
    Ok(render_op(ctx, op)?.join("\n"))
}
