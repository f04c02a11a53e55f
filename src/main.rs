//! Meetboard server entry point.
//!
//! Loads configuration from the environment, connects to the SQLite database
//! (running pending migrations), seeds the reference data, and serves the HTTP
//! API. When invoked as `meetboard init-db` it additionally seeds two example
//! meetings and exits without serving traffic.

mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_reference_data(&db).await?;

    // `meetboard init-db` seeds example meetings and exits, mirroring a
    // one-shot database initialization command.
    if std::env::args().nth(1).as_deref() == Some("init-db") {
        startup::seed_example_meetings(&db).await?;
        tracing::info!("database initialized and seeded");
        return Ok(());
    }

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
