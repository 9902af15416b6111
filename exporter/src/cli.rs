//! CLI module for pingdom-exporter
//!
//! Command-line flags override the corresponding environment variables.

use crate::config::ExporterConfig;
use clap::Parser;
use std::time::Duration;

/// Pingdom exporter - Publishes Pingdom check status as Prometheus metrics
#[derive(Parser, Debug, Default)]
#[command(name = "pingdom-exporter")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    API_KEY                     Pingdom API token (required)
    WAIT_SECONDS                Polling interval in seconds (default: 10)
    PORT                        Listen port (default: 8000)
    HOST                        Bind address (default: 0.0.0.0)
    PINGDOM_API_URL             Pingdom API base URL
    PINGDOM_FETCH_TIMEOUT_SECS  Fetch deadline in seconds (default: none)
    LOG_LEVEL                   Log level (default: info)
"#)]
pub struct Cli {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Polling interval in seconds
    #[arg(short, long)]
    pub wait_seconds: Option<u64>,
}

impl Cli {
    /// Apply the flags that were given on top of `config`
    pub fn apply(&self, mut config: ExporterConfig) -> ExporterConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(secs) = self.wait_seconds {
            config.wait_interval = Duration::from_secs(secs);
        }
        config
    }
}
