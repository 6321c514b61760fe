//! GrowMon Common Library
//!
//! Shared types and utilities for the GrowMon frontend:
//!
//! - [`reading`] - The sensor reading data model (`Reading`, `SensorField`)
//! - [`buffer`] - Fixed-capacity FIFO buffer of readings
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod buffer;
pub mod config;
pub mod error;
pub mod reading;

// Re-export commonly used types at the crate root
pub use buffer::ReadingBuffer;
pub use config::{DeviceConfig, LogFormat, LoggingConfig, MonitorConfig};
pub use error::{Error, Result};
pub use reading::{Reading, SensorField, decode_reading};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// The `RUST_LOG` environment variable, when set, takes precedence over the
/// configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
