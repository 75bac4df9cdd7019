//! Whole-script rendering: bodies, template variables and module assembly.

use crate::helpers::fixtures::*;
use anyhow::Result;
use revscript::catalog::{Column, OpaqueObject, TypeDescriptor};
use revscript::config::RenderOptions;
use revscript::ops::{DowngradeOps, DropTableOp, MigrateOperation, MigrationScript, UpgradeOps};
use revscript::{
    RenderContext, RenderError, render_cmd_body, render_migration_module, render_python_code,
    render_template_vars,
};

fn drop_table(name: &str) -> MigrateOperation {
    MigrateOperation::DropTable(DropTableOp {
        table_name: name.to_string(),
        schema: None,
    })
}

fn unknown_op() -> MigrateOperation {
    MigrateOperation::Other(OpaqueObject {
        kind: "create_sequence".to_string(),
        repr: "CreateSequenceOp('order_seq')".to_string(),
    })
}

fn typed_script() -> MigrationScript {
    MigrationScript::new(
        vec![
            add_column(
                "events",
                Column::new("payload", TypeDescriptor::dialect("postgresql", "JSONB")),
            ),
            add_column(
                "events",
                Column::new("raw", TypeDescriptor::dialect("mysql", "LONGBLOB")),
            ),
            add_column(
                "events",
                Column::new("tags", TypeDescriptor::dialect("postgresql", "HSTORE")),
            ),
        ],
        vec![
            drop_column("events", "tags", None),
            drop_column("events", "raw", None),
            drop_column("events", "payload", None),
        ],
    )
}

#[test]
fn test_empty_directions_render_pass() -> Result<()> {
    let script = MigrationScript::new(vec![], vec![group("users", vec![])]);
    let mut ctx = batch_context();
    let vars = render_template_vars(&mut ctx, &script)?;

    let expected = "# ### commands auto generated by Alembic - please adjust! ###\n    \
                    pass\n    \
                    # ### end Alembic commands ###";
    assert_eq!(vars["upgrades"], expected);
    assert_eq!(vars["downgrades"], expected);
    Ok(())
}

#[test]
fn test_imports_sorted_and_deduplicated() -> Result<()> {
    let mut ctx = RenderContext::default();
    let vars = render_template_vars(&mut ctx, &typed_script())?;

    assert_eq!(
        vars["imports"],
        "from sqlalchemy.dialects import mysql\nfrom sqlalchemy.dialects import postgresql"
    );
    Ok(())
}

#[test]
fn test_rendering_is_deterministic() -> Result<()> {
    let script = typed_script();

    let first = render_template_vars(&mut RenderContext::default(), &script)?;
    let second = render_template_vars(&mut RenderContext::default(), &script)?;
    assert_eq!(first, second);
    assert_eq!(
        render_migration_module(&script, &first),
        render_migration_module(&script, &second)
    );
    Ok(())
}

#[test]
fn test_batch_body_layout() -> Result<()> {
    let ops = vec![
        group(
            "users",
            vec![
                drop_column("users", "legacy", None),
                create_index("ix_users_email", "users", "email"),
            ],
        ),
        drop_table("sessions"),
    ];

    let code = render_python_code(&ops, batch_options())?;
    assert_eq!(
        code,
        "# ### commands auto generated by Alembic - please adjust! ###\n    \
         with op.batch_alter_table('users', schema=None) as batch_op:\n        \
         batch_op.drop_column('legacy')\n        \
         batch_op.create_index('ix_users_email', ['email'], unique=False)\n\
         \n    \
         op.drop_table('sessions')\n    \
         # ### end Alembic commands ###"
    );
    Ok(())
}

#[test]
fn test_multiline_statement_indentation() -> Result<()> {
    let ops = vec![MigrateOperation::CreateTable(create_table("tags", vec![]))];

    let code = render_python_code(&ops, RenderOptions::default())?;
    assert_eq!(
        code,
        "# ### commands auto generated by Alembic - please adjust! ###\n    \
         op.create_table('tags',\n    \
         sa.Column('id', sa.Integer(), nullable=False)\n    \
         )\n    \
         # ### end Alembic commands ###"
    );
    Ok(())
}

#[test]
fn test_custom_module_prefixes() -> Result<()> {
    let opts = RenderOptions {
        sqlalchemy_module_prefix: Some("sqla.".to_string()),
        alembic_module_prefix: Some("migrate.".to_string()),
        ..RenderOptions::default()
    };
    let ops = vec![add_column("users", Column::new("age", integer()))];

    let code = render_python_code(&ops, opts)?;
    assert!(code.contains("migrate.add_column('users', sqla.Column('age', sqla.Integer()))"));
    Ok(())
}

#[test]
fn test_unknown_operation_placeholder_and_strict() -> Result<()> {
    let ops = vec![unknown_op()];

    let mut ctx = RenderContext::default();
    let body = render_cmd_body(&ops, &mut ctx)?;
    assert!(body.contains("\n# [Unknown Python object CreateSequenceOp('order_seq')]\n"));
    assert!(!body.contains("\npass\n"));

    let strict = RenderOptions {
        strict_dispatch: true,
        ..RenderOptions::default()
    };
    let err = render_python_code(&ops, strict).unwrap_err();
    assert_eq!(
        err,
        RenderError::NoRenderer {
            kind: "create_sequence".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_multiple_branches_keep_their_tokens() -> Result<()> {
    let script = MigrationScript {
        message: Some("split engines".to_string()),
        upgrade_ops: vec![
            UpgradeOps {
                ops: vec![drop_table("a")],
                upgrade_token: "upgrades".to_string(),
            },
            UpgradeOps {
                ops: vec![drop_table("b")],
                upgrade_token: "upgrades_engine2".to_string(),
            },
        ],
        downgrade_ops: vec![
            DowngradeOps::new(vec![]),
            DowngradeOps {
                ops: vec![],
                downgrade_token: "downgrades_engine2".to_string(),
            },
        ],
    };

    let mut ctx = RenderContext::default();
    let vars = render_template_vars(&mut ctx, &script)?;
    assert!(vars["upgrades"].contains("op.drop_table('a')"));
    assert!(vars["upgrades_engine2"].contains("op.drop_table('b')"));
    assert!(vars["downgrades_engine2"].contains("pass"));

    let module = render_migration_module(&script, &vars);
    let defs: Vec<&str> = module
        .lines()
        .filter(|line| line.starts_with("def "))
        .collect();
    assert_eq!(
        defs,
        vec![
            "def upgrade():",
            "def downgrade():",
            "def upgrade_engine2():",
            "def downgrade_engine2():",
        ]
    );
    Ok(())
}

#[test]
fn test_migration_module_layout() -> Result<()> {
    let mut script = typed_script();
    script.message = Some("add event columns".to_string());

    let mut ctx = RenderContext::default();
    let vars = render_template_vars(&mut ctx, &script)?;
    let module = render_migration_module(&script, &vars);

    assert!(module.starts_with(
        "\"\"\"add event columns\"\"\"\n\
         from alembic import op\n\
         import sqlalchemy as sa\n\
         from sqlalchemy.dialects import mysql\n\
         from sqlalchemy.dialects import postgresql\n\
         \n\
         \n\
         def upgrade():\n    \
         # ### commands auto generated by Alembic - please adjust! ###\n    \
         op.add_column('events', sa.Column('payload', postgresql.JSONB()))\n"
    ));
    assert!(module.ends_with(
        "    op.drop_column('events', 'payload')\n    \
         # ### end Alembic commands ###\n"
    ));
    Ok(())
}
