//! Default values, computed and identity columns, raw SQL fragments.

use crate::catalog::{Computed, Identity, ServerDefault, SqlExpr, Value};
use crate::render::context::{ItemKind, RenderContext, RenderItem};
use crate::render::literal::{py_bool, py_repr, strip_sql_quotes};

/// Render a value that may be a SQL expression. Expressions are compiled by
/// the dialect and wrapped in `text(...)` unless `wrap_in_text` is false, in
/// which case the bare SQL string literal is returned.
pub fn render_potential_expr(
    ctx: &RenderContext,
    value: &Value,
    wrap_in_text: bool,
    is_server_default: bool,
) -> String {
    match value {
        Value::Literal(literal) => literal.to_string(),
        Value::Expr(expr) => render_sql_expr(ctx, expr, wrap_in_text, is_server_default),
    }
}

pub fn render_sql_expr(
    ctx: &RenderContext,
    expr: &SqlExpr,
    wrap_in_text: bool,
    is_server_default: bool,
) -> String {
    let sql = ctx.dialect.render_ddl_sql_expr(expr, is_server_default);
    if wrap_in_text {
        format!("{}text({})", ctx.sqlalchemy_prefix(), py_repr(&sql))
    } else {
        py_repr(&sql)
    }
}

pub fn render_server_default(ctx: &mut RenderContext, default: &ServerDefault) -> String {
    if let Some(rendered) =
        ctx.user_defined_render(ItemKind::ServerDefault, RenderItem::ServerDefault(default))
    {
        return rendered;
    }

    match default {
        ServerDefault::Computed(computed) => render_computed(ctx, computed),
        ServerDefault::Identity(identity) => render_identity(ctx, identity),
        ServerDefault::Expr { expr } => render_sql_expr(ctx, expr, true, true),
        ServerDefault::Text { value } => py_repr(strip_sql_quotes(value)),
    }
}

fn render_computed(ctx: &RenderContext, computed: &Computed) -> String {
    let mut args = vec![render_sql_expr(ctx, &computed.sqltext, false, false)];
    if let Some(persisted) = computed.persisted {
        args.push(format!("persisted={}", py_bool(persisted)));
    }
    format!("{}Computed({})", ctx.sqlalchemy_prefix(), args.join(", "))
}

fn render_identity(ctx: &RenderContext, identity: &Identity) -> String {
    // always=False differs from leaving it out, so it is never skipped
    let mut kwargs = vec![format!("always={}", py_bool(identity.always))];
    if let Some(on_null) = identity.on_null {
        kwargs.push(format!("on_null={}", py_bool(on_null)));
    }
    kwargs.extend(identity_options(identity));
    format!("{}Identity({})", ctx.sqlalchemy_prefix(), kwargs.join(", "))
}

/// Sequence options that are set, in declaration order.
fn identity_options(identity: &Identity) -> Vec<String> {
    let ints = [
        ("start", identity.start),
        ("increment", identity.increment),
        ("minvalue", identity.minvalue),
        ("maxvalue", identity.maxvalue),
    ];
    let flags = [
        ("nominvalue", identity.nominvalue),
        ("nomaxvalue", identity.nomaxvalue),
        ("cycle", identity.cycle),
    ];

    let mut options: Vec<String> = ints
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
        .collect();
    options.extend(
        flags
            .iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, py_bool(v)))),
    );
    if let Some(cache) = identity.cache {
        options.push(format!("cache={}", cache));
    }
    if let Some(order) = identity.order {
        options.push(format!("order={}", py_bool(order)));
    }
    options
}
