use cs_server::{AppState, build_router, logger};

use cs_webhook::SignatureVerifier;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up .env before reading configuration
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = cs_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = cs_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cs-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    cs_db::migrations::run(&pool).await?;
    info!("Migrations complete");

    // validate() guarantees the secret is present here
    let verifier = match config.webhook.signing_secret.as_deref() {
        Some(secret) => SignatureVerifier::new(secret, config.webhook.tolerance_secs)?,
        None => return Err("webhook signing secret is not configured".into()),
    };
    info!("Webhook signature verifier initialized");

    let app_state = AppState {
        pool,
        verifier: Some(Arc::new(verifier)),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Serve until SIGINT
    info!("Server ready to accept webhook deliveries");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
