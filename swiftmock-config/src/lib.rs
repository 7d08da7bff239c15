//! Shared configuration loader for swiftmock.
//!
//! `defaults/swiftmock.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. Callers layer project files and command
//! line overrides on top of those defaults via [`Loader`] before deserializing into
//! [`SwiftmockConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use swiftmock_parser::swift::generation::MockOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/swiftmock.default.toml");

/// Name of the project file picked up from the working directory when present.
pub const PROJECT_CONFIG_FILE: &str = "swiftmock.toml";

/// Top-level configuration consumed by swiftmock.
#[derive(Debug, Clone, Deserialize)]
pub struct SwiftmockConfig {
    pub mock: MockConfig,
}

/// Mirrors the knobs exposed by the mock generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MockConfig {
    pub marker: String,
    pub suffix: String,
    pub indent: String,
    pub conform_to_protocol: bool,
}

impl From<MockConfig> for MockOptions {
    fn from(config: MockConfig) -> Self {
        MockOptions {
            marker: config.marker,
            suffix: config.suffix,
            indent: config.indent,
            conform_to_protocol: config.conform_to_protocol,
        }
    }
}

impl SwiftmockConfig {
    /// Generator options described by the `[mock]` table.
    pub fn mock_options(&self) -> MockOptions {
        self.mock.clone().into()
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

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SwiftmockConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SwiftmockConfig, ConfigError> {
    Loader::new().build()
}
