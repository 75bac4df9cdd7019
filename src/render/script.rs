//! Whole-script rendering: per-table groups, direction bodies, template
//! variables.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::config::RenderOptions;
use crate::constants::{
    BODY_FOOTER_COMMENT, BODY_HEADER_COMMENT, DOWNGRADE_TOKEN, EMPTY_BODY_STATEMENT,
    IMPORTS_TOKEN, UPGRADE_TOKEN,
};
use crate::error::RenderResult;
use crate::ops::{MigrateOperation, MigrationScript, ModifyTableOps};
use crate::render::context::RenderContext;
use crate::render::literal::{py_repr, py_repr_opt};
use crate::render::printer::{ScriptPrinter, indent_body};
use crate::render::{ScriptRenderer, render_op};

impl ScriptRenderer for ModifyTableOps {
    /// Children in order. With batch rendering on they are wrapped in one
    /// `batch_alter_table` block closed by a blank line. An empty group
    /// renders nothing.
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        if self.ops.is_empty() {
            return Ok(vec![]);
        }

        let mut lines = Vec::new();
        if ctx.opts.render_as_batch {
            lines.push(format!(
                "with {}batch_alter_table({}, schema={}) as batch_op:",
                ctx.alembic_prefix(),
                py_repr(&self.table_name),
                py_repr_opt(self.schema.as_deref())
            ));
            let mut scope = ctx.within_batch();
            for op in &self.ops {
                lines.extend(render_op(&mut scope, op)?);
            }
            lines.push(String::new());
        } else {
            for op in &self.ops {
                lines.extend(render_op(ctx, op)?);
            }
        }
        Ok(lines)
    }
}

/// Render one direction between the marker comments. A direction without
/// any rendered statement gets `pass`.
pub fn render_cmd_body(ops: &[MigrateOperation], ctx: &mut RenderContext) -> RenderResult<String> {
    let mut printer = ScriptPrinter::new();
    printer.writeline(BODY_HEADER_COMMENT);

    let mut has_lines = false;
    for op in ops {
        let lines = render_op(ctx, op)?;
        has_lines = has_lines || !lines.is_empty();
        for line in &lines {
            printer.writeline(line);
        }
    }
    if !has_lines {
        printer.writeline(EMPTY_BODY_STATEMENT);
    }

    printer.writeline(BODY_FOOTER_COMMENT);
    Ok(printer.finish())
}

/// Render every direction of the script into template variables keyed by
/// each container's token, plus the sorted import block under `imports`.
pub fn render_template_vars(
    ctx: &mut RenderContext,
    script: &MigrationScript,
) -> RenderResult<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();

    for (upgrade, downgrade) in script.upgrade_ops.iter().zip(&script.downgrade_ops) {
        let body = render_cmd_body(&upgrade.ops, ctx)?;
        vars.insert(upgrade.upgrade_token.clone(), indent_body(&body));
        let body = render_cmd_body(&downgrade.ops, ctx)?;
        vars.insert(downgrade.downgrade_token.clone(), indent_body(&body));
    }
    vars.insert(IMPORTS_TOKEN.to_string(), ctx.imports().join("\n"));

    Ok(vars)
}

/// Render a list of operations as an indented code block with a fresh
/// context.
pub fn render_python_code(ops: &[MigrateOperation], opts: RenderOptions) -> RenderResult<String> {
    let mut ctx = RenderContext::new(opts);
    let body = render_cmd_body(ops, &mut ctx)?;
    Ok(indent_body(&body))
}

/// Python function name for a template token: `upgrades` becomes `upgrade`,
/// `upgrades_engine1` becomes `upgrade_engine1`.
fn function_name(token: &str) -> String {
    for base in [UPGRADE_TOKEN, DOWNGRADE_TOKEN] {
        if let Some(rest) = token.strip_prefix(base) {
            return format!("{}{}", &base[..base.len() - 1], rest);
        }
    }
    token.to_string()
}

/// Escapes backslashes, then every double quote.
fn escape_docstring(message: &str) -> String {
    message.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Assemble a complete migration module from rendered template variables.
pub fn render_migration_module(script: &MigrationScript, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    if let Some(message) = &script.message {
        out.push_str(&format!("\"\"\"{}\"\"\"\n", escape_docstring(message)));
    }
    out.push_str("from alembic import op\nimport sqlalchemy as sa\n");
    if let Some(imports) = vars.get(IMPORTS_TOKEN).filter(|i| !i.is_empty()) {
        out.push_str(imports);
        out.push('\n');
    }

    let tokens = script
        .upgrade_ops
        .iter()
        .map(|u| &u.upgrade_token)
        .interleave(script.downgrade_ops.iter().map(|d| &d.downgrade_token));
    for token in tokens {
        let body = vars.get(token.as_str()).map(String::as_str).unwrap_or(EMPTY_BODY_STATEMENT);
        out.push_str(&format!(
            "\n\ndef {}():\n    {}\n",
            function_name(token),
            body
        ));
    }

    out
}
