// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles doubles.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "database", "log"];

/// Known keys per section.
const KNOWN_DATABASE_KEYS: &[&str] = &["path"];
const KNOWN_LOG_KEYS: &[&str] = &["targets"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    database: Option<toml::Value>,

    #[serde(default)]
    log: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

/// Where `FileDatabase` keeps its records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding one JSON file per user (default: .doubles/users).
    #[serde(default = "DatabaseConfig::default_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl DatabaseConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(".doubles/users")
    }
}

/// Logger target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Target specs: "stderr", "stdout", or "file:<path>" (default: ["stderr"]).
    #[serde(default = "LogConfig::default_targets")]
    pub targets: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            targets: Self::default_targets(),
        }
    }
}

impl LogConfig {
    fn default_targets() -> Vec<String> {
        vec!["stderr".to_string()]
    }

    /// Parse every target spec.
    pub fn target_specs(&self) -> Result<Vec<TargetSpec>> {
        self.targets.iter().map(|s| s.parse()).collect()
    }
}

/// A parsed log target spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    Stderr,
    Stdout,
    File(PathBuf),
}

impl FromStr for TargetSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stderr" => Ok(TargetSpec::Stderr),
            "stdout" => Ok(TargetSpec::Stdout),
            _ => match s.strip_prefix("file:") {
                Some(path) if !path.is_empty() => Ok(TargetSpec::File(PathBuf::from(path))),
                _ => Err(Error::Config {
                    message: format!(
                        "invalid log target '{}' (expected stderr, stdout, or file:<path>)",
                        s
                    ),
                    path: None,
                }),
            },
        }
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSpec::Stderr => f.write_str("stderr"),
            TargetSpec::Stdout => f.write_str("stdout"),
            TargetSpec::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_err = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_err("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_err(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let database: DatabaseConfig =
        parse_section(flexible.database, "database", KNOWN_DATABASE_KEYS, path)?;
    let log: LogConfig = parse_section(flexible.log, "log", KNOWN_LOG_KEYS, path)?;

    // Reject bad target specs at load time rather than on first write.
    log.target_specs().map_err(|e| match e {
        Error::Config { message, .. } => config_err(message),
        other => other,
    })?;

    Ok(Config { database, log })
}

/// Deserialize one table, warning about keys it does not know.
fn parse_section<T>(
    value: Option<toml::Value>,
    name: &str,
    known: &[&str],
    path: &Path,
) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    if let toml::Value::Table(table) = &value {
        for key in table.keys() {
            if !known.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("{}.{}", name, key));
            }
        }
    }

    value.try_into().map_err(|e: toml::de::Error| Error::Config {
        message: format!("[{}]: {}", name, e),
        path: Some(path.to_path_buf()),
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "doubles: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
