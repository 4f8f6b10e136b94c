use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use record_gateway::config::{load_config, GatewayConfig};
use record_gateway::http::HttpServer;
use record_gateway::lifecycle::{signals, Shutdown};
use record_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "record-gateway")]
#[command(about = "Edge proxy that reformats record search results", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("record-gateway v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        search_url = %config.upstream.search_url,
        default_format = %config.defaults.format,
        default_count = config.defaults.count,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
