//! orgchart - HTTP service for teams, employees and the management tree.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use orgchart as app;
use tokio::net::TcpListener;

use app::api::{AppState, build_router};
use app::config::{AppConfig, ConfigLoadResult};
use app::db;

/// HTTP service for teams, employees and the management tree.
#[derive(Parser)]
#[command(name = "orgchart", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let loaded = AppConfig::try_load(&config_path);
    let mut config = match &loaded {
        ConfigLoadResult::Loaded(config) => config.clone(),
        ConfigLoadResult::Missing | ConfigLoadResult::Invalid(_) => AppConfig::default(),
    };

    // Initialize logging
    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("orgchart {} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!("Config path: {:?}", config_path);

    match loaded {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Could not write default config: {}", e);
            }
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::error!("Config invalid: {}", e);
            bail!("invalid config {}: {}", config_path.display(), e);
        }
    }

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate().context("invalid command line overrides")?;

    // Connect and bring the schema up to date; either failure aborts startup.
    tracing::info!("Database: {}", config.database.path);
    let conn = db::connect(
        &config.database.connection_string(),
        config.database.effective_max_connections(),
    )
    .await
    .context("Failed to connect to database")?;
    db::test_connection(&conn).await.context("Database is not responding")?;

    db::migrate(&conn).await.context("Failed to migrate database schema")?;

    if let Ok(version) = db::get_version(&conn).await {
        tracing::info!("SQLite: {}", version);
    }
    if let Ok(counts) = db::get_table_counts(&conn).await {
        tracing::info!("Tables: {} teams, {} employees", counts.teams, counts.employees);
    }

    let address = config.server.bind_address();
    let prefix = config.server.api_prefix.clone();
    let router = build_router(AppState::new(conn, config));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!("Listening on http://{}{}", address, prefix);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

/// Resolve when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
