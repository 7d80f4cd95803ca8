//! Configuration management for DUKIT.
//!
//! Settings are layered from built-in defaults, an optional TOML file and
//! environment variables prefixed with `DUKIT` (nested keys separated by
//! `__`, e.g. `DUKIT__DIFF__TIMEOUT_MS=2000`).
//!
//! # Example
//!
//! ```
//! use dukit::infrastructure::config::Settings;
//!
//! let settings = Settings::from_toml_str("[diff]\ncontext_lines = 5\n").unwrap();
//! assert_eq!(settings.diff.context_lines, 5);
//! ```

pub mod diff;
pub mod telemetry;

pub use diff::DiffSettings;
pub use telemetry::TelemetrySettings;

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// File comparison settings.
    #[serde(default)]
    pub diff: DiffSettings,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Loads settings from the default config file (if present) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(default_config_file().as_deref())
    }

    /// Loads settings from `path` (if given and present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        Self::finish(builder, None)
    }

    /// Loads settings from `path`, which must exist, and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or a source cannot be read or
    /// deserialized.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::finish(Self::builder()?.add_source(File::from(path)), None)
    }

    /// Parses settings from a TOML document on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has wrong types.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Adds the `DUKIT__*` layer, read from `vars` instead of the process
    /// environment when given.
    fn finish(
        builder: ConfigBuilder<DefaultState>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        builder
            .add_source(
                Environment::with_prefix("DUKIT")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Start with default values
            .set_default("telemetry.log_level", telemetry::default_log_level())?
            .set_default("telemetry.json", false)
    }
}

/// `<config dir>/dukit/config.toml`, if the platform has a config directory.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dukit").join("config.toml"))
}
