//! Shared configuration loader for the gpt2md tools.
//!
//! `defaults/gpt2md.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`Gpt2mdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use gpt2md::{FilenameStyle, RoleLabels};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/gpt2md.default.toml");

/// Top-level configuration consumed by gpt2md applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Gpt2mdConfig {
    pub labels: LabelsConfig,
    pub export: ExportConfig,
}

/// Role labels prefixed to each transcript block.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    pub user: String,
    pub assistant: String,
}

impl From<LabelsConfig> for RoleLabels {
    fn from(config: LabelsConfig) -> Self {
        RoleLabels {
            user: config.user,
            assistant: config.assistant,
        }
    }
}

impl From<&LabelsConfig> for RoleLabels {
    fn from(config: &LabelsConfig) -> Self {
        RoleLabels {
            user: config.user.clone(),
            assistant: config.assistant.clone(),
        }
    }
}

/// Export behavior knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub source_header: bool,
    pub filename: FilenameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilenameConfig {
    pub style: FilenameStyleConfig,
    pub include_id: bool,
}

/// Mirrors the filename conventions the exporter supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FilenameStyleConfig {
    #[serde(rename = "epoch")]
    Epoch,
    #[serde(rename = "date")]
    Date,
}

impl From<FilenameStyleConfig> for FilenameStyle {
    fn from(config: FilenameStyleConfig) -> Self {
        match config {
            FilenameStyleConfig::Epoch => FilenameStyle::Epoch,
            FilenameStyleConfig::Date => FilenameStyle::Date,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Gpt2mdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Gpt2mdConfig, ConfigError> {
    Loader::new().build()
}
