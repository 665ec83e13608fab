use anyhow::Result;
use calc_results::{config::ClientConfig, repl, HttpResults, Session};
use clap::Parser;
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout は REPL が使うのでログは stderr へ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::parse();
    let mut session = Session::new(HttpResults::new(&config.server));

    let mut stdout = io::stdout();
    stdout.write_all(repl::USAGE.as_bytes()).await?;

    repl::run(&mut session, BufReader::new(io::stdin()), &mut stdout).await?;
    Ok(())
}
