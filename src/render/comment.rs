//! Table comment operations

use crate::constants::BODY_INDENT;
use crate::error::RenderResult;
use crate::ops::{CreateTableCommentOp, DropTableCommentOp};
use crate::render::context::RenderContext;
use crate::render::literal::{py_repr, py_repr_opt};
use crate::render::ScriptRenderer;

/// Shared shape of the comment calls: one argument per line. `comment` is
/// only passed for the create form.
fn render_comment_call(
    ctx: &RenderContext,
    function: &str,
    table_name: &str,
    comment: Option<Option<&str>>,
    existing_comment: Option<&str>,
    schema: Option<&str>,
) -> String {
    let mut lines = vec![format!("{}{}(", ctx.alembic_prefix(), function)];
    lines.push(format!("{}{},", BODY_INDENT, py_repr(table_name)));
    if let Some(comment) = comment {
        lines.push(format!("{}{},", BODY_INDENT, py_repr_opt(comment)));
    }
    lines.push(format!(
        "{}existing_comment={},",
        BODY_INDENT,
        py_repr_opt(existing_comment)
    ));
    lines.push(format!("{}schema={}", BODY_INDENT, py_repr_opt(schema)));
    lines.push(")".to_string());
    lines.join("\n")
}

impl ScriptRenderer for CreateTableCommentOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        Ok(vec![render_comment_call(
            ctx,
            "create_table_comment",
            &self.table_name,
            Some(self.comment.as_deref()),
            self.existing_comment.as_deref(),
            self.schema.as_deref(),
        )])
    }
}

impl ScriptRenderer for DropTableCommentOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        Ok(vec![render_comment_call(
            ctx,
            "drop_table_comment",
            &self.table_name,
            None,
            self.existing_comment.as_deref(),
            self.schema.as_deref(),
        )])
    }
}
