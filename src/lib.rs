//! Rendering of schema migration operation trees into Alembic-style Python
//! migration script text.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod dialect;
pub mod error;
pub mod ops;
pub mod render;

pub use error::{RenderError, RenderResult};
pub use render::{
    RenderContext, ScriptRenderer, render_cmd_body, render_migration_module, render_op,
    render_op_text, render_python_code, render_template_vars,
};
