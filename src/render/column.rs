//! Column constructors and column-level operations.

use crate::catalog::Column;
use crate::constants::ALTER_COLUMN_INDENT;
use crate::error::RenderResult;
use crate::ops::{AddColumnOp, AlterColumnOp, Change, DropColumnOp};
use crate::render::context::{ItemKind, RenderContext, RenderItem};
use crate::render::expr::{render_potential_expr, render_server_default};
use crate::render::literal::{py_bool, py_repr};
use crate::render::types::render_type;
use crate::render::ScriptRenderer;

/// `sa.Column('name', <type>, ...)`.
///
/// Computed and identity defaults are positional arguments; any other
/// server default is passed as `server_default=`.
pub fn render_column(ctx: &mut RenderContext, column: &Column) -> String {
    if let Some(rendered) = ctx.user_defined_render(ItemKind::Column, RenderItem::Column(column)) {
        return rendered;
    }

    let mut args = vec![py_repr(&column.name), render_type(ctx, &column.type_)];
    let mut opts: Vec<(&str, String)> = Vec::new();

    if let Some(default) = &column.server_default {
        let rendered = render_server_default(ctx, default);
        if !rendered.is_empty() {
            if default.is_positional() {
                args.push(rendered);
            } else {
                opts.push(("server_default", rendered));
            }
        }
    }

    if let Some(autoincrement) = column.autoincrement.to_literal() {
        opts.push(("autoincrement", autoincrement.to_string()));
    }
    if let Some(nullable) = column.nullable {
        opts.push(("nullable", py_bool(nullable).to_string()));
    }
    if column.system {
        opts.push(("system", py_bool(true).to_string()));
    }
    if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
        opts.push(("comment", py_repr(comment)));
    }

    args.extend(opts.into_iter().map(|(key, value)| format!("{}={}", key, value)));
    for (key, value) in &column.dialect_kwargs {
        args.push(format!(
            "{}={}",
            key,
            render_potential_expr(ctx, value, true, false)
        ));
    }

    format!("{}Column({})", ctx.sqlalchemy_prefix(), args.join(", "))
}

impl ScriptRenderer for AddColumnOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let column = render_column(ctx, &self.column);
        let prefix = ctx.alembic_prefix();

        let text = if ctx.has_batch() {
            format!("{}add_column({})", prefix, column)
        } else {
            let schema = match &self.schema {
                Some(schema) => format!(", schema={}", py_repr(schema)),
                None => String::new(),
            };
            format!(
                "{}add_column({}, {}{})",
                prefix,
                py_repr(&self.table_name),
                column,
                schema
            )
        };
        Ok(vec![text])
    }
}

impl ScriptRenderer for DropColumnOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let prefix = ctx.alembic_prefix();

        let text = if ctx.has_batch() {
            format!("{}drop_column({})", prefix, py_repr(&self.column_name))
        } else {
            let schema = match &self.schema {
                Some(schema) => format!(", schema={}", py_repr(schema)),
                None => String::new(),
            };
            format!(
                "{}drop_column({}, {}{})",
                prefix,
                py_repr(&self.table_name),
                py_repr(&self.column_name),
                schema
            )
        };
        Ok(vec![text])
    }
}

impl ScriptRenderer for AlterColumnOp {
    /// Only attributes the operation changes are rendered. `existing_*`
    /// attributes are echoed where the matching new value is absent.
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let mut text = if ctx.has_batch() {
            format!(
                "{}alter_column({}",
                ctx.alembic_prefix(),
                py_repr(&self.column_name)
            )
        } else {
            format!(
                "{}alter_column({}, {}",
                ctx.alembic_prefix(),
                py_repr(&self.table_name),
                py_repr(&self.column_name)
            )
        };
        let mut push = |key: &str, value: String| {
            text.push_str(&format!(",\n{}{}={}", ALTER_COLUMN_INDENT, key, value));
        };

        if let Some(existing_type) = &self.existing_type {
            push("existing_type", render_type(ctx, existing_type));
        }
        match &self.modify_server_default {
            Change::Unchanged => {}
            Change::Cleared => push("server_default", "None".to_string()),
            Change::Set(default) => push("server_default", render_server_default(ctx, default)),
        }
        if let Some(type_) = &self.modify_type {
            push("type_", render_type(ctx, type_));
        }
        if let Some(nullable) = self.modify_nullable {
            push("nullable", py_bool(nullable).to_string());
        }
        match &self.modify_comment {
            Change::Unchanged => {}
            Change::Cleared => push("comment", "None".to_string()),
            Change::Set(comment) => push("comment", py_repr(comment)),
        }
        if let Some(existing_comment) = &self.existing_comment {
            push("existing_comment", py_repr(existing_comment));
        }
        if self.modify_nullable.is_none() {
            if let Some(existing_nullable) = self.existing_nullable {
                push("existing_nullable", py_bool(existing_nullable).to_string());
            }
        }
        if let Some(autoincrement) = self.autoincrement {
            push("autoincrement", py_bool(autoincrement).to_string());
        }
        if matches!(self.modify_server_default, Change::Unchanged) {
            if let Some(existing) = &self.existing_server_default {
                push(
                    "existing_server_default",
                    render_server_default(ctx, existing),
                );
            }
        }
        if !ctx.has_batch() {
            if let Some(schema) = &self.schema {
                push("schema", py_repr(schema));
            }
        }

        text.push(')');
        Ok(vec![text])
    }
}
