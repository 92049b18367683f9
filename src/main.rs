use anyhow::Context;
use clap::Parser;
use es_mock::config::Config;
use es_mock::server::{build_router, serve};
use es_mock::store::registry::Cluster;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let options = Arc::new(config.server_options());

    // 1. Cluster state, shared by every request:
    let cluster = Cluster::new();

    // 2. Listener (port 0 picks a free port):
    let listener = tokio::net::TcpListener::bind((config.interface.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.interface, config.port))?;
    let local_addr = listener.local_addr()?;

    // 3. Announce the port for test harnesses:
    if let Some(path) = &config.port_file {
        std::fs::write(path, local_addr.port().to_string())
            .with_context(|| format!("failed to write port file {}", path.display()))?;
        tracing::info!("Wrote port {} to {}", local_addr.port(), path.display());
    }

    if options.credentials.is_some() {
        tracing::info!("Basic authentication enabled");
    }
    if !options.response_delay.is_zero() {
        tracing::info!("Delaying every response by {:?}", options.response_delay);
    }

    // 4. HTTP server:
    tracing::info!(
        "Starting mock cluster [{}] at {}",
        options.cluster_name,
        local_addr
    );

    serve(listener, build_router(cluster, options)).await
}
