//! Configuration management for `cleancopy-core`.
//!
//! This module defines the data structures describing which query parameters
//! are considered tracking parameters. It handles YAML (de)serialization and
//! provides utilities for loading, merging, validating and adjusting these
//! configurations before they are frozen into a [`crate::Blacklist`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Characters that can never appear in a query parameter name as written by a user.
const FORBIDDEN_NAME_CHARS: &[char] = &['&', '=', '#', '?'];

/// A single blacklisted query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct BlacklistedParam {
    /// The exact (decoded) parameter name, e.g. `utm_source`. Case-sensitive.
    pub name: String,
    /// Human-readable note about the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Vendor or network that appends the parameter (e.g. "Facebook").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Explicit override for enabling/disabling the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Default for BlacklistedParam {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            source: None,
            enabled: None,
        }
    }
}

impl BlacklistedParam {
    /// Creates an enabled entry with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A parameter is active unless it was explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}

/// Top-level configuration: the ordered list of tracking parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlacklistConfig {
    #[serde(default)]
    pub params: Vec<BlacklistedParam>,
}

impl BlacklistConfig {
    /// Loads blacklisted parameters from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom blacklist from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: BlacklistConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_params(&config.params)?;
        info!("Loaded {} params from file {}.", config.params.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in blacklist from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default blacklist from embedded string...");
        let default_yaml = include_str!("../config/default_blacklist.yaml");
        let config: BlacklistConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default blacklist")?;

        debug!("Loaded {} default params.", config.params.len());
        Ok(config)
    }

    /// Location of the per-user blacklist file, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cleancopy").join("blacklist.yaml"))
    }

    /// Loads the per-user blacklist file when it exists.
    pub fn load_user_config() -> Result<Option<Self>> {
        match Self::user_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path).map(Some),
            Some(path) => {
                debug!("No user blacklist at {}.", path.display());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Names of all enabled params, in configuration order.
    pub fn enabled_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.is_enabled())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Adjusts the active params from CLI lists.
    ///
    /// Names in `enable` that are unknown are appended; known but disabled
    /// entries are re-enabled. Names in `disable` are removed.
    pub fn set_active_params(&mut self, enable: &[String], disable: &[String]) {
        let disable_set: HashSet<&str> = disable.iter().map(String::as_str).collect();
        debug!("Initial params count before filtering: {}", self.params.len());

        let known: HashSet<String> = self.params.iter().map(|p| p.name.clone()).collect();
        for name in disable_set.iter().filter(|n| !known.contains(**n)) {
            warn!("Param '{}' in `disable` list is not blacklisted.", name);
        }

        for name in enable {
            let name = name.trim();
            if name.is_empty() || disable_set.contains(name) {
                continue;
            }
            match self.params.iter_mut().find(|p| p.name == name) {
                Some(existing) => existing.enabled = Some(true),
                None => {
                    debug!("Appending param '{}' from `enable` list.", name);
                    self.params.push(BlacklistedParam::named(name));
                }
            }
        }

        self.params.retain(|p| !disable_set.contains(p.name.as_str()));
        debug!("Final params count after filtering: {}", self.params.len());
    }
}

/// Merges user-defined params with the defaults.
///
/// A user entry replaces the default with the same name in place, so the
/// default ordering is kept. New names are appended in user order.
pub fn merge_params(
    default_config: BlacklistConfig,
    user_config: Option<BlacklistConfig>,
) -> BlacklistConfig {
    debug!("merge_params called. Initial default params count: {}", default_config.params.len());

    let mut params = default_config.params;
    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user params.", user_cfg.params.len());
        let mut index: HashMap<String, usize> = params
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();

        for user_param in user_cfg.params {
            match index.get(&user_param.name) {
                Some(&i) => params[i] = user_param,
                None => {
                    index.insert(user_param.name.clone(), params.len());
                    params.push(user_param);
                }
            }
        }
    }

    debug!("Final total params after merge: {}", params.len());
    BlacklistConfig { params }
}

/// Validates param names (non-empty, unique, no separators or whitespace).
pub fn validate_params(params: &[BlacklistedParam]) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for param in params {
        if param.name.is_empty() {
            errors.push("A param has an empty `name` field.".to_string());
            continue;
        }
        if !names.insert(param.name.as_str()) {
            errors.push(format!("Duplicate param name found: '{}'.", param.name));
        }
        if param.name.chars().any(char::is_whitespace) {
            errors.push(format!("Param '{}' contains whitespace.", param.name));
        }
        if let Some(c) = param.name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
            errors.push(format!("Param '{}' contains reserved character '{}'.", param.name, c));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Blacklist validation failed:\n{}", errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_blacklist_keeps_declared_order() {
        let config = BlacklistConfig::load_default().unwrap();
        let names = config.enabled_names();
        assert_eq!(names.first(), Some(&"utm_source"));
        assert_eq!(names.last(), Some(&"is_from_webapp"));
        assert_eq!(names.len(), 21);
        assert!(validate_params(&config.params).is_ok());
    }

    #[test]
    fn validation_rejects_reserved_characters() {
        let params = vec![BlacklistedParam::named("a=b"), BlacklistedParam::named("x y")];
        let err = validate_params(&params).unwrap_err().to_string();
        assert!(err.contains("reserved character '='"));
        assert!(err.contains("contains whitespace"));
    }
}
