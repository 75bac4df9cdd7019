//! `revscript render` end to end.

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

const SCRIPT_YAML: &str = r#"
message: drop legacy objects
upgrade_ops:
  - ops:
      - op: modify_table_ops
        table_name: users
        ops:
          - op: drop_column
            table_name: users
            column_name: legacy_flag
      - op: drop_table
        table_name: legacy
downgrade_ops:
  - ops: []
"#;

const SCRIPT_JSON: &str = r#"{
  "upgrade_ops": [{"ops": [
    {"op": "add_column", "table_name": "events", "column": {
      "name": "payload",
      "type": {"namespace": {"dialect": "postgresql"}, "name": "JSONB"}
    }}
  ]}],
  "downgrade_ops": [{"ops": [
    {"op": "drop_column", "table_name": "events", "column_name": "payload"}
  ]}]
}"#;

#[test]
fn test_render_python_module() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("ops.yaml", SCRIPT_YAML)?;

    helper
        .command()
        .args(["render", "ops.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\"\"\"drop legacy objects\"\"\"\nfrom alembic import op\nimport sqlalchemy as sa\n",
        ))
        .stdout(predicate::str::contains(
            "def upgrade():\n    # ### commands auto generated by Alembic - please adjust! ###\n    \
             op.drop_column('users', 'legacy_flag')\n    \
             op.drop_table('legacy')\n",
        ))
        .stdout(predicate::str::contains("def downgrade():\n    # ### commands"))
        .stdout(predicate::str::contains("    pass\n"));

    Ok(())
}

#[test]
fn test_render_batch_flag() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("ops.yaml", SCRIPT_YAML)?;

    helper
        .command()
        .args(["render", "ops.yaml", "--render-as-batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    with op.batch_alter_table('users', schema=None) as batch_op:\n        \
             batch_op.drop_column('legacy_flag')\n",
        ));

    Ok(())
}

#[test]
fn test_config_file_then_cli_override() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("ops.yaml", SCRIPT_YAML)?;
    helper.write_file(
        "revscript.yaml",
        "render:\n  render_as_batch: true\n  alembic_module_prefix: migrate.\n",
    )?;

    helper
        .command()
        .args(["render", "ops.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "with migrate.batch_alter_table('users', schema=None) as batch_op:",
        ))
        .stdout(predicate::str::contains("migrate.drop_table('legacy')"));

    helper
        .command()
        .args(["render", "ops.yaml", "--no-render-as-batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate.drop_column('users', 'legacy_flag')"))
        .stdout(predicate::str::contains("batch_alter_table").not());

    Ok(())
}

#[test]
fn test_render_json_template_vars() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("ops.json", SCRIPT_JSON)?;

    let output = helper
        .command()
        .args(["render", "ops.json", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let vars: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(vars["imports"], "from sqlalchemy.dialects import postgresql");
    assert_eq!(
        vars["upgrades"],
        "# ### commands auto generated by Alembic - please adjust! ###\n    \
         op.add_column('events', sa.Column('payload', postgresql.JSONB()))\n    \
         # ### end Alembic commands ###"
    );
    assert_eq!(
        vars["downgrades"],
        "# ### commands auto generated by Alembic - please adjust! ###\n    \
         op.drop_column('events', 'payload')\n    \
         # ### end Alembic commands ###"
    );

    Ok(())
}

#[test]
fn test_render_to_output_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("ops.json", SCRIPT_JSON)?;

    helper
        .command()
        .args(["render", "ops.json", "-o", "migration.py"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = helper.read_file("migration.py")?;
    assert!(written.contains("from sqlalchemy.dialects import postgresql\n"));
    assert!(written.contains("def downgrade():"));

    Ok(())
}

#[test]
fn test_missing_operations_file() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .args(["render", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read operations file"));

    Ok(())
}

#[test]
fn test_invalid_operations_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("ops.json", r#"{"upgrade_ops": [{"ops": [{"op": "rename_table"}]}]}"#)?;

    helper
        .command()
        .args(["render", "ops.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON operations file"));

    Ok(())
}

#[test]
fn test_render_error_is_reported() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file(
        "ops.json",
        r#"{"upgrade_ops": [{"ops": [
            {"op": "execute", "sqltext": {"kind": "function", "name": "refresh", "args": []}}
        ]}], "downgrade_ops": [{"ops": []}]}"#,
    )?;

    helper
        .command()
        .args(["render", "ops.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render ops.json"));

    Ok(())
}
