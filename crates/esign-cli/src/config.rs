//! Application configuration

use anyhow::Context;
use esign_catalog::PlanCatalog;
use esign_core::{FormConfig, SubmissionConfig};
use esign_signature::PadStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration file; every section is optional
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Validation and field rules
    pub form: FormConfig,
    /// Signature pad geometry and ink
    pub pad: PadStyle,
    /// Simulated backend behavior
    pub submission: SubmissionConfig,
    /// Plan catalog file; the built-in plans when absent
    pub catalog: Option<PathBuf>,
}

impl AppConfig {
    /// Parse TOML text
    ///
    /// # Errors
    /// Returns an error if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load a TOML file
    ///
    /// Relative catalog paths resolve against the file's directory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config = Self::from_toml_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;

        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load the configured catalog, or the built-in one
    ///
    /// # Errors
    /// Returns an error if the catalog file cannot be loaded.
    pub fn catalog(&self) -> anyhow::Result<PlanCatalog> {
        match &self.catalog {
            Some(path) => PlanCatalog::load(path)
                .with_context(|| format!("loading catalog {}", path.display())),
            None => Ok(PlanCatalog::builtin()),
        }
    }
}
