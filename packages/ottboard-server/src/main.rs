mod bootstrap;
mod error;
mod routes;
mod state;

use crate::state::AppState;
use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(clap::Parser)]
#[command(name = "ottboard-server")]
#[command(about = "OTT analytics dashboard server")]
struct CliArgs {
    /// Bind address; overrides OTTBOARD_ADDR.
    #[clap(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = CliArgs::parse();
    let addr: SocketAddr = match args.addr {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid --addr: {text}"))?,
        None => bootstrap::config::server_addr_from_env()?,
    };

    let state = Arc::new(AppState {
        cron_secret: bootstrap::config::cron_secret_from_env(),
    });
    let app = bootstrap::app::axum_app(state);

    info!(%addr, "ottboard started");
    println!(
        "ottboard started at http://{}",
        addr.to_string().replace("0.0.0.0", "127.0.0.1")
    );
    let tcp_listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(tcp_listener, app)
        .await
        .context("server terminated")?;
    Ok(())
}
