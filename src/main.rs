use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tms::{api, config::ServerConfig, registry::Registry};

#[derive(Parser)]
#[command(name = "tms")]
#[command(about = "Transport management API for delivery dockets and truck logsheets")]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tms=info,tower_http=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let registry = Registry::new();
    let app = api::create_router_with_config(registry, &cli.server);

    let listener = tokio::net::TcpListener::bind(cli.server.bind_addr()).await?;
    tracing::info!("Server started on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
