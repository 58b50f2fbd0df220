//! Configuration file support for component-tree.
//!
//! Provides YAML-based configuration through `component-tree.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use component_tree::analysis::domain::{Branch, BranchType, CrawlerDepthLimit, NewCodePeriod};
use component_tree::shared::security::read_regular_file;
use component_tree::shared::Result;

pub const CONFIG_FILENAME: &str = "component-tree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub scm_base_path: Option<String>,
    pub compute_durations: Option<bool>,
    pub branch: Option<BranchConfig>,
    pub new_code_period: Option<NewCodePeriod>,
    pub max_depth: Option<String>,
    pub format: Option<String>,
    /// Snapshot of the components stored by previous analyses
    pub snapshot: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The analysed branch as written in the configuration file.
#[derive(Debug, Deserialize)]
pub struct BranchConfig {
    pub name: String,
    #[serde(rename = "type", default)]
    pub branch_type: BranchType,
    pub reference_branch: Option<String>,
    pub pull_request_key: Option<String>,
}

impl BranchConfig {
    pub fn to_branch(&self) -> Branch {
        match self.branch_type {
            BranchType::Main => Branch::main(self.name.clone()),
            BranchType::Branch => Branch::branch(self.name.clone(), self.reference_branch.clone()),
            BranchType::PullRequest => Branch::pull_request(
                self.name.clone(),
                self.pull_request_key.clone().unwrap_or_else(|| self.name.clone()),
                self.reference_branch
                    .clone()
                    .unwrap_or_else(|| Branch::DEFAULT_MAIN_NAME.to_string()),
            ),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\nHint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\nHint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    // A relative snapshot path is relative to the config file
    if let (Some(snapshot), Some(dir)) = (config.snapshot.as_mut(), path.parent()) {
        if snapshot.is_relative() {
            *snapshot = dir.join(&*snapshot);
        }
    }

    tracing::debug!(path = %path.display(), "config file loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref branch) = config.branch {
        if branch.name.trim().is_empty() {
            bail!(
                "Invalid config: branch.name must not be empty.\n\n\
                 Hint: Set the name of the analysed branch (e.g., \"main\" or \"feature/login\")."
            );
        }
    }
    if let Some(ref max_depth) = config.max_depth {
        if let Err(e) = max_depth.parse::<CrawlerDepthLimit>() {
            bail!("Invalid config: max_depth: {}", e);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
