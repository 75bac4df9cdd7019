//! Rendering of individual operations, inside and outside batch blocks.

use crate::helpers::fixtures::*;
use anyhow::Result;
use insta::assert_snapshot;
use revscript::catalog::{
    Column, Computed, Constraint, ConstraintName, ForeignKeyConstraint, ForeignKeyElement,
    Identity, MetaData, PrimaryKeyConstraint, ServerDefault, SqlExpr, Table, TypeDescriptor,
};
use revscript::constants::MAX_PYTHON_ARGS;
use revscript::ops::{AlterColumnOp, Change, CreateTableOp, ExecuteSqlOp, MigrateOperation};
use revscript::{RenderContext, render_op, render_op_text};
use rstest::rstest;

/// Table-scoped operations drop the table name (and schema) once they are
/// rendered against `batch_op`.
#[rstest]
#[case::drop_column(
    drop_column("users", "email", Some("app")),
    "op.drop_column('users', 'email', schema='app')",
    "batch_op.drop_column('email')"
)]
#[case::add_column(
    add_column("users", Column::new("age", integer()).nullable(true)),
    "op.add_column('users', sa.Column('age', sa.Integer(), nullable=True))",
    "batch_op.add_column(sa.Column('age', sa.Integer(), nullable=True))"
)]
#[case::create_index(
    create_index("ix_users_email", "users", "email"),
    "op.create_index('ix_users_email', 'users', ['email'], unique=False)",
    "batch_op.create_index('ix_users_email', ['email'], unique=False)"
)]
#[case::drop_index(
    drop_index("ix_users_email", "users"),
    "op.drop_index('ix_users_email', table_name='users')",
    "batch_op.drop_index('ix_users_email')"
)]
#[case::create_unique(
    create_unique("uq_users_email", "users", "email", Some("app")),
    "op.create_unique_constraint('uq_users_email', 'users', ['email'], schema='app')",
    "batch_op.create_unique_constraint('uq_users_email', ['email'])"
)]
#[case::drop_constraint(
    drop_unique("uq_users_email", "users"),
    "op.drop_constraint('uq_users_email', 'users', type_='unique')",
    "batch_op.drop_constraint('uq_users_email', type_='unique')"
)]
fn test_batch_and_plain_shapes(
    #[case] op: MigrateOperation,
    #[case] plain: &str,
    #[case] batched: &str,
) -> Result<()> {
    let mut ctx = RenderContext::default();
    assert_eq!(render_op(&mut ctx, &op)?, vec![plain.to_string()]);

    let mut ctx = batch_context();
    let lines = render_op(&mut ctx, &group("users", vec![op]))?;
    assert_eq!(
        lines,
        vec![
            "with op.batch_alter_table('users', schema=None) as batch_op:".to_string(),
            batched.to_string(),
            String::new(),
        ]
    );
    assert!(!ctx.has_batch());
    Ok(())
}

#[test]
fn test_alter_column_echoes_existing_nullable() -> Result<()> {
    let mut op = AlterColumnOp::new("users", "email");
    op.existing_type = Some(string(50));
    op.existing_nullable = Some(false);
    op.modify_type = Some(TypeDescriptor::new("Text"));

    let mut ctx = RenderContext::default();
    let text = render_op_text(&mut ctx, &MigrateOperation::AlterColumn(op))?;
    assert_snapshot!(text, @r"
op.alter_column('users', 'email',
           existing_type=sa.String(50),
           type_=sa.Text(),
           existing_nullable=False)
");
    Ok(())
}

#[test]
fn test_alter_column_changed_nullable_hides_existing() -> Result<()> {
    let mut op = AlterColumnOp::new("users", "email");
    op.existing_nullable = Some(true);
    op.modify_nullable = Some(false);
    op.modify_comment = Change::Cleared;
    op.existing_comment = Some("contact address".to_string());
    op.schema = Some("app".to_string());

    let mut ctx = RenderContext::default();
    let text = render_op_text(&mut ctx, &MigrateOperation::AlterColumn(op.clone()))?;
    assert_eq!(
        text,
        "op.alter_column('users', 'email',\n           \
         nullable=False,\n           \
         comment=None,\n           \
         existing_comment='contact address',\n           \
         schema='app')"
    );
    assert!(!text.contains("existing_nullable"));

    let mut ctx = batch_context();
    let lines = render_op(&mut ctx, &group("users", vec![MigrateOperation::AlterColumn(op)]))?;
    assert_eq!(
        lines[1],
        "batch_op.alter_column('email',\n           \
         nullable=False,\n           \
         comment=None,\n           \
         existing_comment='contact address')"
    );
    Ok(())
}

#[test]
fn test_alter_column_server_default_change() -> Result<()> {
    let mut op = AlterColumnOp::new("users", "status");
    op.existing_server_default = Some(ServerDefault::text("'new'"));
    op.modify_server_default = Change::Set(ServerDefault::text("'active'"));

    let mut ctx = RenderContext::default();
    let text = render_op_text(&mut ctx, &MigrateOperation::AlterColumn(op))?;
    assert_eq!(
        text,
        "op.alter_column('users', 'status',\n           server_default='active')"
    );
    Ok(())
}

#[test]
fn test_identity_always_false_is_rendered() -> Result<()> {
    let column = Column::new("id", integer())
        .nullable(false)
        .server_default(ServerDefault::Identity(Identity {
            always: false,
            start: Some(1),
            ..Identity::default()
        }));

    let mut ctx = RenderContext::default();
    assert_eq!(
        render_op_text(&mut ctx, &add_column("users", column))?,
        "op.add_column('users', sa.Column('id', sa.Integer(), \
         sa.Identity(always=False, start=1), nullable=False))"
    );
    Ok(())
}

#[test]
fn test_computed_and_plain_server_defaults() -> Result<()> {
    let table = create_table(
        "line_items",
        vec![
            Column::new("total", integer()).server_default(ServerDefault::Computed(Computed {
                sqltext: SqlExpr::text("price * qty"),
                persisted: Some(true),
            })),
            Column::new("status", string(20)).server_default(ServerDefault::text("'open'")),
            Column::new("created_at", TypeDescriptor::new("DateTime"))
                .server_default(ServerDefault::expr(SqlExpr::function("now", vec![]))),
        ],
    );

    let mut ctx = RenderContext::default();
    let text = render_op_text(&mut ctx, &MigrateOperation::CreateTable(table))?;
    assert_snapshot!(text, @r"
op.create_table('line_items',
sa.Column('id', sa.Integer(), nullable=False),
sa.Column('total', sa.Integer(), sa.Computed('price * qty', persisted=True)),
sa.Column('status', sa.String(20), server_default='open'),
sa.Column('created_at', sa.DateTime(), server_default=sa.text('now()'))
)
");
    Ok(())
}

fn orders_table() -> Table {
    let mut table = Table::new("orders", None);
    table.columns = vec![
        Column::new("id", integer()).nullable(false),
        Column::new("user_id", integer()),
    ];
    table.constraints = vec![
        Constraint::PrimaryKey(PrimaryKeyConstraint {
            name: Some(ConstraintName::Convention("pk_orders".to_string())),
            columns: vec!["id".to_string()],
        }),
        Constraint::ForeignKey(ForeignKeyConstraint {
            name: Some(ConstraintName::Convention(
                "fk_orders_user_id_users".to_string(),
            )),
            elements: vec![ForeignKeyElement {
                parent_column: "user_id".to_string(),
                target: "users.uid".to_string(),
                link_to_name: false,
            }],
            ondelete: Some("CASCADE".to_string()),
            ..ForeignKeyConstraint::default()
        }),
    ];
    table
}

#[rstest]
#[case::known_table(None, Some(("users", None)), "['users.id']")]
#[case::unknown_table(None, None, "['users.uid']")]
#[case::default_schema(None, Some(("app.users", Some("app"))), "['app.users.id']")]
#[case::schema_qualified_table(Some("app"), None, "['users.uid']")]
fn test_foreign_key_target_resolution(
    #[case] table_schema: Option<&str>,
    #[case] known: Option<(&str, Option<&str>)>,
    #[case] expected_refcols: &str,
) -> Result<()> {
    let mut table = orders_table();
    table.schema = table_schema.map(str::to_string);
    let mut op = CreateTableOp::new(table);
    if let Some((fullname, schema)) = known {
        let mut namespace = MetaData::new(schema.map(str::to_string));
        namespace.add_table(fullname, &[("uid", "id")]);
        op = op.with_namespace(namespace);
    }

    let schema_kwarg = match table_schema {
        Some(schema) => format!(",\nschema='{}'", schema),
        None => String::new(),
    };
    let mut ctx = RenderContext::default();
    let text = render_op_text(&mut ctx, &MigrateOperation::CreateTable(op))?;
    assert_eq!(
        text,
        format!(
            "op.create_table('orders',\n\
             sa.Column('id', sa.Integer(), nullable=False),\n\
             sa.Column('user_id', sa.Integer()),\n\
             sa.ForeignKeyConstraint(['user_id'], {}, name=op.f('fk_orders_user_id_users'), ondelete='CASCADE'),\n\
             sa.PrimaryKeyConstraint('id', name=op.f('pk_orders')){}\n\
             )",
            expected_refcols, schema_kwarg
        )
    );
    Ok(())
}

#[rstest]
#[case::at_ceiling(MAX_PYTHON_ARGS, false)]
#[case::past_ceiling(MAX_PYTHON_ARGS + 1, true)]
fn test_positional_argument_ceiling(#[case] args: usize, #[case] unpacked: bool) -> Result<()> {
    // one column comes from the fixture itself
    let columns = (1..args)
        .map(|i| Column::new(format!("c{}", i), integer()))
        .collect();
    let op = create_table("wide", columns);

    let mut ctx = RenderContext::default();
    let text = render_op_text(&mut ctx, &MigrateOperation::CreateTable(op))?;
    assert_eq!(text.starts_with("op.create_table('wide',\n*["), unpacked);
    assert_eq!(text.ends_with("sa.Integer())]\n)"), unpacked);
    assert_eq!(text.matches("sa.Column(").count(), args);
    Ok(())
}

#[test]
fn test_execute_inside_batch_uses_batch_op() -> Result<()> {
    let op = MigrateOperation::ExecuteSql(ExecuteSqlOp::new("DELETE FROM users"));

    let mut ctx = RenderContext::default();
    assert_eq!(render_op_text(&mut ctx, &op)?, "op.execute('DELETE FROM users')");

    let mut ctx = batch_context();
    let lines = render_op(&mut ctx, &group("users", vec![op]))?;
    assert_eq!(lines[1], "batch_op.execute('DELETE FROM users')");
    Ok(())
}

#[test]
fn test_dialect_type_registers_import() -> Result<()> {
    let column = Column::new("payload", TypeDescriptor::dialect("postgresql", "JSONB"));

    let mut ctx = RenderContext::default();
    assert_eq!(
        render_op_text(&mut ctx, &add_column("events", column))?,
        "op.add_column('events', sa.Column('payload', postgresql.JSONB()))"
    );
    assert_eq!(
        ctx.imports().collect::<Vec<_>>(),
        vec!["from sqlalchemy.dialects import postgresql"]
    );
    Ok(())
}
