use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Complete monitor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Device polling settings.
    #[serde(default)]
    pub device: DeviceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the polled device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Endpoint address of the controller.
    #[serde(default = "default_address")]
    pub address: String,

    /// Poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Number of buffered samples (the plot's horizontal resolution).
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

fn default_address() -> String {
    "http://10.0.1.3".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_buffer_capacity() -> usize {
    100
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            poll_interval_ms: default_poll_interval_ms(),
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: MonitorConfig = json5::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.device.address.trim().is_empty() {
            return Err(Error::Config(
                "Device address cannot be empty".to_string(),
            ));
        }

        if self.device.poll_interval_ms == 0 {
            return Err(Error::Config(
                "Poll interval must be at least 1 ms".to_string(),
            ));
        }

        // The plot divides its width across len - 1 intervals.
        if self.device.buffer_capacity < 2 {
            return Err(Error::Config(
                "Buffer capacity must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}
