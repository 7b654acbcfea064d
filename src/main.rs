use anyhow::Context;
use clap::Parser;
use collection_service::server::config::{DEFAULT_HOST, DEFAULT_PORT};
use collection_service::{AppState, ServerConfig, build_router};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "collection-service")]
#[command(about = "In-memory CRUD service for cars, furniture and flower stock")]
struct Args {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let config = ServerConfig::new(args.host, args.port);

    // 1. Collections:
    let state = AppState::new();

    // 2. HTTP Router:
    let app = build_router(state);

    // 3. Start HTTP server:
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
