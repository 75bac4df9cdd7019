use super::DialectImpl;
use crate::catalog::{Literal, SqlExpr};

/// Generic ANSI-flavoured rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultImpl;

impl DialectImpl for DefaultImpl {
    fn name(&self) -> &'static str {
        "default"
    }

    fn render_ddl_sql_expr(&self, expr: &SqlExpr, _is_server_default: bool) -> String {
        compile_expr(expr, &|inner, type_name| {
            format!("CAST({} AS {})", inner, type_name)
        })
    }
}

/// Quote an identifier only when it is not a plain lower-case name.
pub(crate) fn quote_ident_if_needed(ident: &str) -> String {
    let plain = !ident.is_empty()
        && ident
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && ident
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$');
    if plain {
        ident.to_string()
    } else {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }
}

pub(crate) fn sql_literal(value: &Literal) -> String {
    match value {
        Literal::None => "NULL".to_string(),
        Literal::Bool(true) => "true".to_string(),
        Literal::Bool(false) => "false".to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Float(x) => x.to_string(),
        Literal::Str(s) => format!("'{}'", s.replace('\'', "''")),
        Literal::List(items) => format!(
            "({})",
            items.iter().map(sql_literal).collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Shared expression compiler; dialects differ only in how casts are spelled.
pub(crate) fn compile_expr(expr: &SqlExpr, cast: &dyn Fn(&str, &str) -> String) -> String {
    match expr {
        SqlExpr::Text { sql } => sql.clone(),
        SqlExpr::Column { name, table } => match table {
            Some(table) => format!(
                "{}.{}",
                quote_ident_if_needed(table),
                quote_ident_if_needed(name)
            ),
            None => quote_ident_if_needed(name),
        },
        SqlExpr::Literal { value } => sql_literal(value),
        SqlExpr::Function { name, args } => format!(
            "{}({})",
            name,
            args.iter()
                .map(|arg| compile_expr(arg, cast))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        SqlExpr::Binary {
            left,
            operator,
            right,
        } => format!(
            "{} {} {}",
            compile_operand(left, cast),
            operator,
            compile_operand(right, cast)
        ),
        SqlExpr::Cast { expr, type_name } => cast(&compile_operand(expr, cast), type_name),
    }
}

fn compile_operand(expr: &SqlExpr, cast: &dyn Fn(&str, &str) -> String) -> String {
    match expr {
        SqlExpr::Binary { .. } => format!("({})", compile_expr(expr, cast)),
        _ => compile_expr(expr, cast),
    }
}
