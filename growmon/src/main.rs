//! GrowMon - Desktop monitor for a networked grow-box controller.
//!
//! Polls the controller over HTTP at a fixed interval and plots the
//! buffered sensor readings as time-series lines.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use growmon::GrowMon;
use growmon::client::DeviceClient;
use growmon_common::{LoggingConfig, MonitorConfig};

/// Desktop monitor for a networked grow-box controller.
#[derive(Parser, Debug)]
#[command(name = "growmon")]
#[command(about = "Polls a grow-box controller and plots its sensor readings")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format); defaults apply without one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate simulated readings instead of polling the device
    #[arg(long)]
    demo: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => MonitorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => MonitorConfig::default(),
    };

    // Initialize logging
    let log_config = LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        format: config.logging.format,
    };
    growmon_common::init_tracing(&log_config)
        .map_err(|e| anyhow::anyhow!("Failed to init tracing: {}", e))?;

    info!("Starting GrowMon");

    let client = DeviceClient::new().context("Failed to build HTTP client")?;
    let demo = args.demo;

    // Run the Iced application
    iced::application(
        move || GrowMon::boot(&config, client.clone(), demo),
        GrowMon::update,
        GrowMon::view,
    )
    .title("GrowMon")
    .subscription(GrowMon::subscription)
    .theme(GrowMon::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
