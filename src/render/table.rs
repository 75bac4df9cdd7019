//! Table creation and removal.

use crate::constants::MAX_PYTHON_ARGS;
use crate::error::RenderResult;
use crate::ops::{CreateTableOp, DropTableOp};
use crate::render::column::render_column;
use crate::render::constraint::render_constraint;
use crate::render::context::RenderContext;
use crate::render::literal::{py_repr, py_str_list};
use crate::render::ScriptRenderer;

impl ScriptRenderer for CreateTableOp {
    /// Columns come first in declaration order, then constraints sorted by
    /// their rendered text. Past the positional argument ceiling the
    /// arguments are passed as one unpacked list.
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let table = &self.table;

        let mut args: Vec<String> = table
            .columns
            .iter()
            .map(|column| render_column(ctx, column))
            .filter(|rendered| !rendered.is_empty())
            .collect();

        let mut constraints = Vec::with_capacity(table.constraints.len());
        for constraint in &table.constraints {
            if let Some(rendered) = render_constraint(ctx, constraint, &self.namespace)? {
                constraints.push(rendered);
            }
        }
        constraints.sort();
        args.extend(constraints);

        let args = if args.len() > MAX_PYTHON_ARGS {
            format!("*[{}]", args.join(",\n"))
        } else {
            args.join(",\n")
        };

        let mut text = format!(
            "{}create_table({},\n{}",
            ctx.alembic_prefix(),
            py_repr(&table.name),
            args
        );
        if let Some(schema) = &table.schema {
            text.push_str(&format!(",\nschema={}", py_repr(schema)));
        }
        if let Some(comment) = table.comment.as_deref().filter(|c| !c.is_empty()) {
            text.push_str(&format!(",\ncomment={}", py_repr(comment)));
        }
        for (key, value) in &table.kwargs {
            text.push_str(&format!(",\n{}={}", key.replace(' ', "_"), value));
        }
        if !table.prefixes.is_empty() {
            text.push_str(&format!(",\nprefixes={}", py_str_list(&table.prefixes)));
        }
        text.push_str("\n)");

        Ok(vec![text])
    }
}

impl ScriptRenderer for DropTableOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let schema = match &self.schema {
            Some(schema) => format!(", schema={}", py_repr(schema)),
            None => String::new(),
        };
        Ok(vec![format!(
            "{}drop_table({}{})",
            ctx.alembic_prefix(),
            py_repr(&self.table_name),
            schema
        )])
    }
}
