use crate::config::types::*;

// Config derives Default

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            render_as_batch: false,
            sqlalchemy_module_prefix: Some("sa.".to_string()),
            alembic_module_prefix: Some("op.".to_string()),
            user_module_prefix: None,
            strict_dispatch: false,
            dialect: "default".to_string(),
        }
    }
}
