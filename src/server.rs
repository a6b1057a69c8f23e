//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection pool, migrations, click worker
//! spawning, and the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::geoip::GeoLocator;
use crate::infrastructure::persistence::PgClickRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with migrations applied)
/// - Geolocation client
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    let geo = Arc::new(GeoLocator::new(
        &config.geoip_api_url,
        Duration::from_secs(config.geoip_timeout_secs),
    )?);
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));

    tokio::spawn(run_click_worker(
        click_rx,
        click_repository,
        geo,
        config.click_worker_concurrency,
    ));
    tracing::info!("Click worker started");

    let state = AppState::new(
        pool,
        config.base_url.clone(),
        &config.jwt_secret,
        click_tx,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
