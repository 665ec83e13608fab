use anyhow::Result;
use calc_results::{config::ServerConfig, server};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let listener = TcpListener::bind(config.addr).await?;
    server::serve(listener, server::shared_store()).await?;
    Ok(())
}
