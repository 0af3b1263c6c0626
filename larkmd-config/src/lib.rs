//! Shared configuration loader for the larkmd toolchain.
//!
//! `defaults/larkmd.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`LarkmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use larkmd_babel::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/larkmd.default.toml");

/// Top-level configuration consumed by larkmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LarkmdConfig {
    pub convert: ConvertSection,
    pub output: OutputSection,
}

/// Conversion knobs; mirrors [`ConvertOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSection {
    pub highlight: bool,
}

/// CLI output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    pub pretty_json: bool,
}

impl From<ConvertSection> for ConvertOptions {
    fn from(section: ConvertSection) -> Self {
        ConvertOptions {
            highlight: section.highlight,
        }
    }
}

impl From<&ConvertSection> for ConvertOptions {
    fn from(section: &ConvertSection) -> Self {
        ConvertOptions {
            highlight: section.highlight,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LarkmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LarkmdConfig, ConfigError> {
    Loader::new().build()
}
