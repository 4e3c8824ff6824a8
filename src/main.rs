//! TyreHub Marketplace Service
//!
//! REST API for the tyre marketplace.
//! Reads configuration from TOML file (~/.config/tyrehub/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tyrehub::config::{LogFormat, LoggingSettings};
use tyrehub::domain::RepositoryProvider;
use tyrehub::infrastructure::database::migrator::Migrator;
use tyrehub::shared::shutdown::ShutdownCoordinator;
use tyrehub::{
    create_api_router, default_config_path, init_database, AppConfig, SeaOrmRepositoryProvider,
};

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides();
            (cfg, Some(e))
        }
    };

    init_tracing(&app_cfg.logging);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!(
            "Failed to load config {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
    }

    info!("Starting TyreHub Marketplace Service...");

    let db_config = app_cfg.database.to_database_config();
    let jwt_config = app_cfg.security.jwt_config();
    info!(
        "Session tokens accepted from issuer {}, {} admin subject(s)",
        jwt_config.issuer,
        app_cfg.security.admin_subjects.len()
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Initialize shutdown coordinator
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();

    // Start listening for shutdown signals (SIGTERM, SIGINT)
    shutdown.start_signal_listener();

    let api_router = create_api_router(
        repos,
        db.clone(),
        jwt_config,
        app_cfg.security.admin_subjects.clone(),
    );

    // Start REST API server with graceful shutdown
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_shutdown = shutdown_signal.clone();
    let served = axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        })
        .await;

    match served {
        Ok(()) => info!("REST API server stopped"),
        Err(e) => error!("REST API server error: {}", e),
    }

    info!("Performing final cleanup...");
    let closed = shutdown
        .run_cleanup(|| async move {
            if let Err(e) = db.close().await {
                warn!("Error closing database connection: {}", e);
            } else {
                info!("Database connection closed");
            }
        })
        .await;
    if !closed {
        warn!("Cleanup did not finish before the shutdown timeout");
    }

    info!("TyreHub Marketplace Service shutdown complete");
    Ok(())
}
