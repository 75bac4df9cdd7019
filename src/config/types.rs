use clap::Args;
use serde::{Deserialize, Serialize};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConfigInput {
    pub render: Option<RenderInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub render: RenderOptions,
}

// Rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RenderInput {
    pub render_as_batch: Option<bool>,
    pub sqlalchemy_module_prefix: Option<String>,
    pub alembic_module_prefix: Option<String>,
    pub user_module_prefix: Option<String>,
    pub strict_dispatch: Option<bool>,
    pub dialect: Option<String>,
}

/// Options consulted by every renderer during one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    /// Wrap per-table operation groups in `batch_alter_table` blocks.
    pub render_as_batch: bool,
    /// Prefix for schema library constructors (`Column`, `Integer`, ...).
    pub sqlalchemy_module_prefix: Option<String>,
    /// Prefix for migration operation calls outside batch blocks.
    pub alembic_module_prefix: Option<String>,
    /// Prefix for user-defined types; `None` uses each type's module path.
    pub user_module_prefix: Option<String>,
    /// Fail on unknown operation kinds instead of emitting a placeholder.
    pub strict_dispatch: bool,
    /// Dialect implementation used for SQL and type rendering.
    pub dialect: String,
}

// CLI argument group for rendering options
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[arg(long, help = "Wrap table alterations in batch_alter_table blocks")]
    pub render_as_batch: bool,

    #[arg(long, help = "Disable batch rendering even if enabled in config")]
    pub no_render_as_batch: bool,

    #[arg(long, help = "Prefix for SQLAlchemy constructors (e.g. 'sa.')")]
    pub sqlalchemy_module_prefix: Option<String>,

    #[arg(long, help = "Prefix for migration operations (e.g. 'op.')")]
    pub alembic_module_prefix: Option<String>,

    #[arg(long, help = "Prefix for user-defined types")]
    pub user_module_prefix: Option<String>,

    #[arg(long, help = "Fail on operation kinds without a renderer")]
    pub strict: bool,

    #[arg(long, help = "Dialect implementation (default, postgresql)")]
    pub dialect: Option<String>,
}

// Conversion from CLI args to config input
impl From<RenderArgs> for RenderInput {
    fn from(args: RenderArgs) -> Self {
        Self {
            render_as_batch: if args.no_render_as_batch {
                Some(false)
            } else if args.render_as_batch {
                Some(true)
            } else {
                None
            },
            sqlalchemy_module_prefix: args.sqlalchemy_module_prefix,
            alembic_module_prefix: args.alembic_module_prefix,
            user_module_prefix: args.user_module_prefix,
            strict_dispatch: if args.strict { Some(true) } else { None },
            dialect: args.dialect,
        }
    }
}
