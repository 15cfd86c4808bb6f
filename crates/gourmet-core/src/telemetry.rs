//! Tracing subscriber setup.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::GourmetResult;
use serde::{Deserialize, Serialize};

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Whether to include the event target in output.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_log_level() -> String {
    "info,gourmet=debug".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &TracingConfig) -> GourmetResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| crate::GourmetError::Configuration(format!("Invalid log level: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init(),
    };

    result.map_err(|e| {
        crate::GourmetError::internal(format!("Failed to install subscriber: {}", e))
    })?;

    tracing::info!(
        log_level = %config.log_level,
        log_format = ?config.log_format,
        "Tracing initialized"
    );

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &TracingConfig) -> GourmetResult<()> {
    Ok(())
}
