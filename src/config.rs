use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:5080";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5080";

/// 結果ストアサーバの設定
#[derive(Debug, Clone, Parser)]
#[command(name = "calc-server")]
#[command(about = "Stores calculation results and returns them by ID")]
#[command(version)]
pub struct ServerConfig {
    /// 待ち受けアドレス
    #[arg(short, long, env = "CALC_SERVER_ADDR", default_value = DEFAULT_SERVER_ADDR)]
    pub addr: SocketAddr,
}

/// REPL クライアントの設定
#[derive(Debug, Clone, Parser)]
#[command(name = "calc")]
#[command(about = "Interactive calculator backed by the result store")]
#[command(version)]
pub struct ClientConfig {
    /// 結果ストアサーバのベース URL
    #[arg(short, long, env = "CALC_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,
}
