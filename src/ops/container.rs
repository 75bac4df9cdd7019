//! Operation containers: per-table groups and per-direction script bodies.

use serde::{Deserialize, Serialize};

use super::MigrateOperation;
use crate::constants::{DOWNGRADE_TOKEN, UPGRADE_TOKEN};

/// Operations scoped to a single table, rendered inside one batch block when
/// batch rendering is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyTableOps {
    pub table_name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub ops: Vec<MigrateOperation>,
}

impl ModifyTableOps {
    pub fn new(table_name: impl Into<String>, ops: Vec<MigrateOperation>) -> Self {
        Self {
            table_name: table_name.into(),
            schema: None,
            ops,
        }
    }
}

fn default_upgrade_token() -> String {
    UPGRADE_TOKEN.to_string()
}

fn default_downgrade_token() -> String {
    DOWNGRADE_TOKEN.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOps {
    #[serde(default)]
    pub ops: Vec<MigrateOperation>,
    #[serde(default = "default_upgrade_token")]
    pub upgrade_token: String,
}

impl UpgradeOps {
    pub fn new(ops: Vec<MigrateOperation>) -> Self {
        Self {
            ops,
            upgrade_token: default_upgrade_token(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DowngradeOps {
    #[serde(default)]
    pub ops: Vec<MigrateOperation>,
    #[serde(default = "default_downgrade_token")]
    pub downgrade_token: String,
}

impl DowngradeOps {
    pub fn new(ops: Vec<MigrateOperation>) -> Self {
        Self {
            ops,
            downgrade_token: default_downgrade_token(),
        }
    }
}

/// A whole migration: one or more upgrade/downgrade pairs. Scripts that merge
/// several branches carry one pair per branch, each with distinct tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MigrationScript {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub upgrade_ops: Vec<UpgradeOps>,
    #[serde(default)]
    pub downgrade_ops: Vec<DowngradeOps>,
}

impl MigrationScript {
    pub fn new(upgrade: Vec<MigrateOperation>, downgrade: Vec<MigrateOperation>) -> Self {
        Self {
            message: None,
            upgrade_ops: vec![UpgradeOps::new(upgrade)],
            downgrade_ops: vec![DowngradeOps::new(downgrade)],
        }
    }
}
