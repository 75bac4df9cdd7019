use super::DialectImpl;
use super::default::compile_expr;
use crate::catalog::SqlExpr;

/// PostgreSQL rendering: casts use the `::` operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresqlImpl;

impl DialectImpl for PostgresqlImpl {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn render_ddl_sql_expr(&self, expr: &SqlExpr, _is_server_default: bool) -> String {
        compile_expr(expr, &|inner, type_name| format!("{}::{}", inner, type_name))
    }
}
