//! Logging setup.

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use super::config::TelemetrySettings;

/// Builder for the process-wide tracing subscriber.
///
/// Logs always go to stderr so stdout carries only the comparison output.
pub struct TelemetryBuilder {
    service_name: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Creates a builder with an `info` default filter and text output.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json: false,
        }
    }

    /// Creates a builder from loaded settings.
    #[must_use]
    pub fn from_settings(service_name: impl Into<String>, settings: &TelemetrySettings) -> Self {
        Self::new(service_name)
            .with_log_level(&settings.log_level)
            .with_json(settings.json)
    }

    /// Sets the filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switches between JSON and human-readable output.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is not a valid filter directive or a
    /// global subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .with_context(|| format!("Invalid log level '{}'", self.log_level))?,
        };

        let fmt_layer = if self.json {
            fmt::layer().json().with_writer(std::io::stderr).boxed()
        } else {
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        tracing::debug!(service = %self.service_name, "Telemetry initialized");
        Ok(())
    }
}
