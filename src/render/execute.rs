use crate::error::{RenderError, RenderResult};
use crate::ops::{ExecuteSqlOp, SqlPayload};
use crate::render::context::RenderContext;
use crate::render::literal::py_repr;
use crate::render::ScriptRenderer;

impl ScriptRenderer for ExecuteSqlOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        match &self.sqltext {
            SqlPayload::Text(sql) => Ok(vec![format!(
                "{}execute({})",
                ctx.alembic_prefix(),
                py_repr(sql)
            )]),
            SqlPayload::Expr(_) => Err(RenderError::unsupported(
                "rendering of SQL expression constructs is not supported for execute; \
                 use a plain SQL string",
            )),
        }
    }
}
