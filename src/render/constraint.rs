//! Constraint rendering: inline `Table(...)` arguments and constraint
//! operations.

use tracing::warn;

use crate::catalog::{
    CheckConstraint, Constraint, ConstraintName, ForeignKeyConstraint, ForeignKeyElement,
    PrimaryKeyConstraint, SchemaNamespace, UniqueConstraint,
};
use crate::error::{RenderError, RenderResult};
use crate::ops::{
    CreateCheckConstraintOp, CreateForeignKeyOp, CreatePrimaryKeyOp, CreateUniqueConstraintOp,
    DropConstraintOp,
};
use crate::render::context::{ItemKind, RenderContext, RenderItem};
use crate::render::expr::render_sql_expr;
use crate::render::literal::{py_bool, py_repr, py_str_list};
use crate::render::ScriptRenderer;

/// Render a constraint name. Convention names go through `f()` so the naming
/// convention is not applied again when the migration runs.
pub fn render_gen_name(ctx: &RenderContext, name: Option<&ConstraintName>) -> String {
    match name {
        None => "None".to_string(),
        Some(ConstraintName::Plain(name)) => py_repr(name),
        Some(ConstraintName::Convention(name)) => {
            format!("{}f({})", ctx.alembic_prefix(), py_repr(name))
        }
    }
}

/// Render a constraint as a `Table(...)` argument. `None` means there is
/// nothing to emit for it.
pub fn render_constraint(
    ctx: &mut RenderContext,
    constraint: &Constraint,
    namespace: &dyn SchemaNamespace,
) -> RenderResult<Option<String>> {
    let kind = match constraint {
        Constraint::PrimaryKey(_) => ItemKind::PrimaryKey,
        Constraint::ForeignKey(_) => ItemKind::ForeignKey,
        Constraint::Unique(_) => ItemKind::Unique,
        Constraint::Check(_) => ItemKind::Check,
        Constraint::Other(obj) => {
            warn!("No renderer is established for object {}", obj);
            return Ok(Some(format!("[Unknown Python object {}]", obj)));
        }
    };
    if let Some(rendered) = ctx.user_defined_render(kind, RenderItem::Constraint(constraint)) {
        return Ok(Some(rendered));
    }

    match constraint {
        Constraint::PrimaryKey(pk) => Ok(render_primary_key(ctx, pk)),
        Constraint::ForeignKey(fk) => render_foreign_key(ctx, fk, namespace).map(Some),
        Constraint::Unique(uq) => Ok(Some(render_unique_inline(ctx, uq))),
        Constraint::Check(ck) => Ok(render_check(ctx, ck)),
        Constraint::Other(_) => Ok(None),
    }
}

fn render_primary_key(ctx: &RenderContext, pk: &PrimaryKeyConstraint) -> Option<String> {
    if pk.columns.is_empty() {
        return None;
    }

    let mut args: Vec<String> = pk.columns.iter().map(|c| py_repr(c)).collect();
    if pk.name.is_some() {
        args.push(format!("name={}", render_gen_name(ctx, pk.name.as_ref())));
    }
    Some(format!(
        "{}PrimaryKeyConstraint({})",
        ctx.sqlalchemy_prefix(),
        args.join(", ")
    ))
}

/// Target column spec of one foreign key element.
///
/// Two-token specs get the namespace's default schema. When the target table
/// is known and the element does not already link by column name, the
/// column key is replaced by the column's database name. Unknown targets keep
/// the target as written.
fn fk_colspec(
    element: &ForeignKeyElement,
    namespace: &dyn SchemaNamespace,
) -> RenderResult<String> {
    let tokens: Vec<&str> = element.target.split('.').collect();
    if tokens.len() < 2 {
        return Err(RenderError::malformed(
            "foreign key",
            format!(
                "target {} of column {} has no table",
                py_repr(&element.target),
                py_repr(&element.parent_column)
            ),
        ));
    }

    let (table_tokens, colname) = tokens.split_at(tokens.len() - 1);
    let mut colname = colname[0];

    let table_fullname = match namespace.default_schema() {
        Some(schema) if tokens.len() == 2 => format!("{}.{}", schema, table_tokens[0]),
        _ => table_tokens.join("."),
    };

    if !element.link_to_name && namespace.has_table(&table_fullname) {
        if let Some(name) = namespace.column_name(&table_fullname, colname) {
            colname = name;
        }
    }

    Ok(format!("{}.{}", table_fullname, colname))
}

fn render_foreign_key(
    ctx: &RenderContext,
    fk: &ForeignKeyConstraint,
    namespace: &dyn SchemaNamespace,
) -> RenderResult<String> {
    if fk.elements.is_empty() {
        return Err(RenderError::malformed(
            "foreign key",
            format!(
                "constraint {} has no columns",
                render_gen_name(ctx, fk.name.as_ref())
            ),
        ));
    }

    let cols: Vec<&str> = fk
        .elements
        .iter()
        .map(|e| e.parent_column.as_str())
        .collect();
    let refcols = fk
        .elements
        .iter()
        .map(|e| fk_colspec(e, namespace))
        .collect::<RenderResult<Vec<_>>>()?;

    let mut args = vec![py_str_list(&cols), py_str_list(&refcols)];
    if fk.name.is_some() {
        args.push(format!("name={}", render_gen_name(ctx, fk.name.as_ref())));
    }
    if let Some(onupdate) = fk.onupdate.as_deref().filter(|v| !v.is_empty()) {
        args.push(format!("onupdate={}", py_repr(onupdate)));
    }
    if let Some(ondelete) = fk.ondelete.as_deref().filter(|v| !v.is_empty()) {
        args.push(format!("ondelete={}", py_repr(ondelete)));
    }
    if let Some(initially) = fk.initially.as_deref().filter(|v| !v.is_empty()) {
        args.push(format!("initially={}", py_repr(initially)));
    }
    if fk.deferrable == Some(true) {
        args.push(format!("deferrable={}", py_bool(true)));
    }
    if fk.use_alter {
        args.push(format!("use_alter={}", py_bool(true)));
    }

    Ok(format!(
        "{}ForeignKeyConstraint({})",
        ctx.sqlalchemy_prefix(),
        args.join(", ")
    ))
}

/// Options shared by the inline and the `create_unique_constraint` forms.
fn unique_options(uq: &UniqueConstraint) -> Vec<String> {
    let mut opts = Vec::new();
    if uq.deferrable == Some(true) {
        opts.push(format!("deferrable={}", py_bool(true)));
    }
    if let Some(initially) = uq.initially.as_deref().filter(|v| !v.is_empty()) {
        opts.push(format!("initially={}", py_repr(initially)));
    }
    opts
}

fn render_unique_inline(ctx: &RenderContext, uq: &UniqueConstraint) -> String {
    let mut args: Vec<String> = uq.columns.iter().map(|c| py_repr(c)).collect();
    args.extend(unique_options(uq));
    if uq.name.is_some() {
        args.push(format!("name={}", render_gen_name(ctx, uq.name.as_ref())));
    }
    format!(
        "{}UniqueConstraint({})",
        ctx.sqlalchemy_prefix(),
        args.join(", ")
    )
}

fn render_check(ctx: &RenderContext, ck: &CheckConstraint) -> Option<String> {
    // already emitted by the column type that created it
    if ck.created_by_type {
        return None;
    }

    let mut args = vec![render_sql_expr(ctx, &ck.sqltext, false, false)];
    if ck.name.is_some() {
        args.push(format!("name={}", render_gen_name(ctx, ck.name.as_ref())));
    }
    Some(format!(
        "{}CheckConstraint({})",
        ctx.sqlalchemy_prefix(),
        args.join(", ")
    ))
}

impl ScriptRenderer for CreateUniqueConstraintOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let uq = &self.constraint;

        let mut args = vec![render_gen_name(ctx, uq.name.as_ref())];
        if !ctx.has_batch() {
            args.push(py_repr(&self.table_name));
        }
        args.push(py_str_list(&uq.columns));
        args.extend(unique_options(uq));
        if !ctx.has_batch() {
            if let Some(schema) = &self.schema {
                args.push(format!("schema={}", py_repr(schema)));
            }
        }

        Ok(vec![format!(
            "{}create_unique_constraint({})",
            ctx.alembic_prefix(),
            args.join(", ")
        )])
    }
}

impl ScriptRenderer for CreateForeignKeyOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let has_batch = ctx.has_batch();

        let mut args = vec![render_gen_name(ctx, self.constraint_name.as_ref())];
        if !has_batch {
            args.push(py_repr(&self.source_table));
        }
        args.push(py_repr(&self.referent_table));
        args.push(py_str_list(&self.local_cols));
        args.push(py_str_list(&self.remote_cols));

        let mut kwargs: Vec<(&str, Option<String>)> = Vec::new();
        if !has_batch {
            kwargs.push(("source_schema", self.source_schema.as_deref().map(py_repr)));
        }
        kwargs.extend([
            ("referent_schema", self.referent_schema.as_deref().map(py_repr)),
            ("onupdate", self.onupdate.as_deref().map(py_repr)),
            ("ondelete", self.ondelete.as_deref().map(py_repr)),
            ("initially", self.initially.as_deref().map(py_repr)),
            ("deferrable", self.deferrable.map(|v| py_bool(v).to_string())),
            ("use_alter", self.use_alter.map(|v| py_bool(v).to_string())),
        ]);
        args.extend(
            kwargs
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v))),
        );

        Ok(vec![format!(
            "{}create_foreign_key({})",
            ctx.alembic_prefix(),
            args.join(", ")
        )])
    }
}

impl ScriptRenderer for CreatePrimaryKeyOp {
    fn render(&self, _ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        Err(RenderError::NotYetSupported {
            kind: "create_primary_key",
        })
    }
}

impl ScriptRenderer for CreateCheckConstraintOp {
    fn render(&self, _ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        Err(RenderError::NotYetSupported {
            kind: "create_check_constraint",
        })
    }
}

impl ScriptRenderer for DropConstraintOp {
    fn render(&self, ctx: &mut RenderContext) -> RenderResult<Vec<String>> {
        let name = render_gen_name(ctx, Some(&self.constraint_name));
        let type_ = match self.constraint_type {
            Some(t) => py_repr(t.as_str()),
            None => "None".to_string(),
        };

        let text = if ctx.has_batch() {
            format!(
                "{}drop_constraint({}, type_={})",
                ctx.alembic_prefix(),
                name,
                type_
            )
        } else {
            let schema = match &self.schema {
                Some(schema) => format!(", schema={}", py_repr(schema)),
                None => String::new(),
            };
            format!(
                "{}drop_constraint({}, {}{}, type_={})",
                ctx.alembic_prefix(),
                name,
                py_repr(&self.table_name),
                schema,
                type_
            )
        };
        Ok(vec![text])
    }
}
