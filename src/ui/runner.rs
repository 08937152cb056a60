//! Server startup and serving loop.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    domain::WeatherStore,
    error::ServerError,
    infrastructure::{repository::InMemoryWeatherTable, seed},
};

use super::{config::ServerConfig, router::build_router, signal, state::AppState};

/// Run the weather API server until a shutdown signal arrives.
///
/// The store is seeded once before the listener binds and never written
/// to afterwards; request handlers only hold the read-only store trait.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store: Arc<dyn WeatherStore> = match &config.seed_file {
        Some(path) => {
            let records = seed::load_seed_records(path)?;
            tracing::info!(
                "Seeded {} weather records from {}",
                records.len(),
                path.display()
            );
            Arc::new(InMemoryWeatherTable::from_records(records))
        }
        None => {
            tracing::info!("No seed file configured, starting with an empty table");
            Arc::new(InMemoryWeatherTable::new())
        }
    };

    let state = Arc::new(AppState { store });
    let router = build_router(state);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Weather API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await?;

    Ok(())
}
