use dd_server::error::Result as ServerErrorResult;
use dd_server::{AppState, build_router, logger};

use dd_db::ConnectionManager;

use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = dd_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting dd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and bring the schema up to date
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = ConnectionManager::connect(
        &database_path,
        config.database.max_connections,
        Duration::from_secs(config.database.busy_timeout_secs),
    )
    .await?;

    let app = build_router(AppState::new(pool.clone(), &config));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be stopped externally
            std::future::pending::<()>().await;
        }
    }
}
