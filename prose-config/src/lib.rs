//! Shared configuration loader for the prose toolchain.
//!
//! `defaults/prose.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ProseConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use prose_core::aggregation::LemmaPolicy;
use prose_core::OrthographyOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/prose.default.toml");

/// Format name that turns the formatting stage off.
pub const NO_FORMAT: &str = "none";

/// Top-level configuration consumed by prose applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ProseConfig {
    pub orthography: OrthographyOptions,
    pub aggregation: AggregationConfig,
    pub formatting: FormattingConfig,
    pub pipeline: PipelineConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregationConfig {
    pub lemma_policy: LemmaPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    /// A registered format name, or [`NO_FORMAT`].
    pub default_format: String,
}

impl FormattingConfig {
    pub fn formatter(&self) -> Option<&str> {
        match self.default_format.as_str() {
            NO_FORMAT => None,
            name => Some(name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub debug: bool,
}

/// Wire server knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub max_connections: usize,
    pub max_request_bytes: usize,
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

    /// Apply a single key/value override (command-line flags end up here).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ProseConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProseConfig, ConfigError> {
    Loader::new().build()
}
