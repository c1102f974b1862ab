//! Optional YAML settings file for dependency-hierarchy.
//!
//! A `dependency-hierarchy.config.yml` in the working directory is picked up
//! automatically; `--config <FILE>` names another file. Values given on the
//! command line take precedence over the file.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::shared::error::HierarchyError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dependency-hierarchy.config.yml";

/// Settings accepted in the config file; every field is optional.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Package every hierarchy is pruned to
    pub filter: Option<String>,
    pub no_color: Option<bool>,
    pub quiet: Option<bool>,
    /// Keys this version does not understand, reported as warnings
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parses and validates YAML text; an empty document means "no settings"
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ConfigFile = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.filter.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(HierarchyError::Validation {
                message: "config field 'filter' must not be empty. Set it to a package id \
                          (e.g. \"Newtonsoft.Json\") or remove it."
                    .to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn unknown_field_names(&self) -> impl Iterator<Item = &str> {
        self.unknown_fields.keys().map(String::as_str)
    }
}

/// A config file together with the path it was read from
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: ConfigFile,
}

/// Reads the file given with `--config`, or else the one discovered in `dir`.
///
/// A missing explicit file is an error; a missing discovered file is not.
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Option<LoadedConfig>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let discovered = dir.join(CONFIG_FILENAME);
            if !discovered.is_file() {
                return Ok(None);
            }
            discovered
        }
    };

    let config = read_config(&path)?;
    Ok(Some(LoadedConfig { path, config }))
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    ConfigFile::from_yaml(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Allowed fields are 'filter', 'no_color' and 'quiet'.",
            path.display()
        )
    })
}
