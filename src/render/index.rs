//! Index operations.

use std::collections::BTreeMap;

use crate::catalog::{IndexElement, Value};
use crate::error::RenderResult;
use crate::ops::{CreateIndexOp, DropIndexOp};
use crate::render::constraint::render_gen_name;
use crate::render::context::RenderContext;
use crate::render::expr::{render_potential_expr, render_sql_expr};
use crate::render::literal::{py_bool, py_repr, py_repr_opt};
use crate::render::ScriptRenderer;

/// `, key=value, ...` for dialect options, or an empty string.
fn render_kwargs(ctx: &RenderContext, kwargs: &BTreeMap<String, Value>) -> String {
    kwargs
        .iter()
        .map(|(key, value)| format!(", {}={}", key, render_potential_expr(ctx, value, true, false)))
        .collect()
}

impl ScriptRenderer for CreateIndexOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let index = &self.index;

        let columns = index
            .elements
            .iter()
            .map(|element| match element {
                IndexElement::Column(name) => py_repr(name),
                IndexElement::Expr(expr) => render_sql_expr(ctx, expr, true, false),
            })
            .collect::<Vec<_>>()
            .join(", ");
        let name = render_gen_name(ctx, index.name.as_ref());
        let kwargs = render_kwargs(ctx, &index.kwargs);

        let text = if ctx.has_batch() {
            format!(
                "{}create_index({}, [{}], unique={}{})",
                ctx.alembic_prefix(),
                name,
                columns,
                py_bool(index.unique),
                kwargs
            )
        } else {
            let schema = match &index.schema {
                Some(schema) => format!(", schema={}", py_repr(schema)),
                None => String::new(),
            };
            format!(
                "{}create_index({}, {}, [{}], unique={}{}{})",
                ctx.alembic_prefix(),
                name,
                py_repr(&index.table_name),
                columns,
                py_bool(index.unique),
                schema,
                kwargs
            )
        };
        Ok(vec![text])
    }
}

impl ScriptRenderer for DropIndexOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let name = render_gen_name(ctx, Some(&self.index_name));
        let kwargs = render_kwargs(ctx, &self.kwargs);

        let text = if ctx.has_batch() {
            format!("{}drop_index({}{})", ctx.alembic_prefix(), name, kwargs)
        } else {
            let schema = match &self.schema {
                Some(schema) => format!(", schema={}", py_repr(schema)),
                None => String::new(),
            };
            format!(
                "{}drop_index({}, table_name={}{}{})",
                ctx.alembic_prefix(),
                name,
                py_repr_opt(self.table_name.as_deref()),
                schema,
                kwargs
            )
        };
        Ok(vec![text])
    }
}
