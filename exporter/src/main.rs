//! Pingdom Exporter Entry Point

use clap::Parser;
use pingdom_exporter::cli::Cli;
use pingdom_exporter::config::ExporterConfig;
use pingdom_exporter::metrics::MetricsPublisher;
use pingdom_exporter::pingdom::PingdomClient;
use pingdom_exporter::poller::CheckPoller;
use pingdom_exporter::{logging, server, AppState};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    info!("Pingdom Exporter v{}", env!("CARGO_PKG_VERSION"));

    let config = match ExporterConfig::from_env() {
        Ok(config) => cli.apply(config),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let publisher = match MetricsPublisher::new() {
        Ok(publisher) => publisher,
        Err(e) => {
            error!("Failed to register metrics: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = PingdomClient::new(
        reqwest::Client::new(),
        config.api_base_url.clone(),
        config.api_key.clone(),
    );

    let _poller = CheckPoller::new(client, publisher.clone(), config.wait_interval)
        .with_fetch_timeout(config.fetch_timeout)
        .start();

    let state = AppState { publisher };

    match server::run(state, &config.bind_addr()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
