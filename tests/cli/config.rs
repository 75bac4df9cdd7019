//! `revscript config` output and validation.

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_config_defaults_as_json() -> Result<()> {
    let helper = CliTestHelper::new();

    let output = helper
        .command()
        .args(["config", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(config["render"]["render_as_batch"], false);
    assert_eq!(config["render"]["sqlalchemy_module_prefix"], "sa.");
    assert_eq!(config["render"]["alembic_module_prefix"], "op.");
    assert_eq!(config["render"]["user_module_prefix"], serde_json::Value::Null);
    assert_eq!(config["render"]["dialect"], "default");

    Ok(())
}

#[test]
fn test_config_merges_file_and_flags() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file(
        "revscript.yaml",
        "render:\n  user_module_prefix: myapp.types.\n  dialect: mysql\n",
    )?;

    helper
        .command()
        .args(["config", "--dialect", " PostgreSQL ", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dialect: postgresql"))
        .stdout(predicate::str::contains("user_module_prefix: myapp.types."))
        .stdout(predicate::str::contains("strict_dispatch: true"));

    Ok(())
}

#[test]
fn test_explicit_config_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("custom.yaml", "render:\n  render_as_batch: true\n")?;

    helper
        .command()
        .args(["config", "--config-file", "custom.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("render_as_batch: true"));

    Ok(())
}

#[test]
fn test_empty_dialect_is_rejected() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .args(["config", "--dialect", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dialect name cannot be empty"));

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("revscript.yaml", "render: [not, a, mapping]\n")?;

    helper
        .command()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));

    Ok(())
}
