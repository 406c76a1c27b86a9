//! TOML settings for the profiler and loaders.
//!
//! ```toml
//! [profile]
//! type_ratio_threshold = 0.8
//! column_policy = "union"
//!
//! [templates]
//! scaling = "Standardize {column}."
//!
//! [csv]
//! delimiter = ";"
//! ```
//!
//! Every table and key is optional; omitted values keep their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use insight_ingest::{CsvOptions, LoadOptions};
use insight_profile::{ProfileConfig, Profiler, RecommendationTemplates};
use serde::{Deserialize, Serialize};

/// Settings file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub profile: ProfileConfig,
    pub templates: RecommendationTemplates,
    pub csv: CsvOptions,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse settings")
    }

    /// Loads settings from a file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parse settings file {}", path.display()))
    }

    /// Loads settings from `path` when given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn profiler(&self) -> Profiler {
        Profiler::new(self.profile.clone(), self.templates.clone())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            csv: self.csv,
            ..LoadOptions::default()
        }
    }
}
