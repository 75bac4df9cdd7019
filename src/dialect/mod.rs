//! Dialect implementations: engine-specific SQL and type rendering hooks.

mod default;
mod postgresql;

pub use default::DefaultImpl;
pub use postgresql::PostgresqlImpl;

use crate::catalog::{SqlExpr, TypeDescriptor};
use crate::render::RenderContext;

/// Engine-specific rendering consulted by the generic renderers.
pub trait DialectImpl: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Stringify an expression to SQL as it should appear in DDL.
    fn render_ddl_sql_expr(&self, expr: &SqlExpr, is_server_default: bool) -> String;

    /// Engine-native rendering for a type. `None` declines and leaves the
    /// type to the generic renderer.
    fn render_type(&self, _type_: &TypeDescriptor, _ctx: &RenderContext) -> Option<String> {
        None
    }
}

/// Look up a dialect implementation by name, falling back to the generic one.
pub fn impl_for_name(name: &str) -> Box<dyn DialectImpl> {
    match name {
        "postgresql" | "postgres" => Box::new(PostgresqlImpl),
        "default" => Box::new(DefaultImpl),
        other => {
            tracing::debug!("No dialect implementation for {}, using default", other);
            Box::new(DefaultImpl)
        }
    }
}
