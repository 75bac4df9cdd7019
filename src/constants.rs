// Generated code argument limits
pub const MAX_PYTHON_ARGS: usize = 255;

// Script body markers
pub const BODY_HEADER_COMMENT: &str = "# ### commands auto generated by Alembic - please adjust! ###";
pub const BODY_FOOTER_COMMENT: &str = "# ### end Alembic commands ###";
pub const EMPTY_BODY_STATEMENT: &str = "pass";

// Indentation
pub const BODY_INDENT: &str = "    ";
pub const ALTER_COLUMN_INDENT: &str = "           ";

// Batch scope object name used inside `with ... as batch_op:` blocks
pub const BATCH_OP_PREFIX: &str = "batch_op.";

// Module used for dialect-specific type imports
pub const DIALECTS_MODULE: &str = "sqlalchemy.dialects";

// Configuration file name
pub const CONFIG_FILENAME: &str = "revscript.yaml";

// Template tokens for the default single-branch script
pub const UPGRADE_TOKEN: &str = "upgrades";
pub const DOWNGRADE_TOKEN: &str = "downgrades";
pub const IMPORTS_TOKEN: &str = "imports";
