//! Report configuration file handling.
//!
//! Settings come from three layers: built-in defaults, an optional
//! `bait-report.toml`, and command-line flags, each overriding the last.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bait_core::EmptyRowPolicy;
use bait_ingest::{ColumnRoles, DEFAULT_FILE_PATTERN};

/// File name looked up in the data folder when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "bait-report.toml";

/// Contents of a configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Observation file name pattern.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Policy for animals with only accidental touches.
    #[serde(default)]
    pub empty_rows: Option<EmptyRowPolicy>,

    /// Source column names for the four semantic roles.
    #[serde(default)]
    pub columns: ColumnRoles,
}

impl ReportConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse config: {}", path.display()))
    }

    /// Loads `explicit` if given, otherwise `<data_dir>/bait-report.toml`
    /// when it exists, otherwise the defaults.
    pub fn discover(data_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = data_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Using configuration file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub pattern: String,
    pub empty_rows: EmptyRowPolicy,
    pub columns: ColumnRoles,
}

impl Settings {
    /// Applies CLI overrides on top of a loaded configuration.
    pub fn resolve(
        data_dir: &Path,
        config: ReportConfig,
        pattern: Option<&str>,
        empty_rows: Option<EmptyRowPolicy>,
    ) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            pattern: pattern
                .map(str::to_string)
                .or(config.pattern)
                .unwrap_or_else(|| DEFAULT_FILE_PATTERN.to_string()),
            empty_rows: empty_rows.or(config.empty_rows).unwrap_or_default(),
            columns: config.columns,
        }
    }
}
