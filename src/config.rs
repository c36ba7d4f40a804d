//! Configuration file support for clearbom.
//!
//! Provides YAML-based configuration through `clearbom.config.yml` files,
//! including data structures, file loading, and validation. Values here sit
//! between the built-in defaults and the command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::ReportFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "clearbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub sbom: Option<PathBuf>,
    pub policy: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
    pub format: Option<String>,
    pub fail_on_violation: Option<bool>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if set
    pub fn report_format(&self) -> Result<Option<ReportFormat>> {
        self.format
            .as_deref()
            .map(ReportFormat::from_str)
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
    }

    /// Unknown top-level keys, in sorted order
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown_fields.keys().map(String::as_str)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null; treat it as "no settings".
    let config: Option<ConfigFile> = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;
    let config = config.unwrap_or_default();

    validate_config(&config)?;

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
    let paths = [
        ("sbom", &config.sbom),
        ("policy", &config.policy),
        ("summary", &config.summary),
        ("markdown", &config.markdown),
    ];
    for (key, value) in paths {
        if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default, or give a file path.",
                key
            );
        }
    }

    config.report_format()?;
    Ok(())
}
