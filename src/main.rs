use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chat_relay::{
    build_app,
    cli::{Args, Command},
    client::RelayClient,
    config::{Config, RunMode},
    terminal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chat_relay=info,tower_http=info")),
        )
        .init();

    match Args::parse().command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Chat { url } => terminal::run(RelayClient::new(&url)?).await,
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    info!(provider = %config.provider.kind, model = %config.provider.model, "configuration loaded");

    let app = build_app(&config)?;

    if config.run_mode == RunMode::Handler {
        warn!("handler mode: router built for an external host, no listener bound; set RUN_MODE=listen to serve");
        return Ok(());
    }

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("chat relay listening at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
