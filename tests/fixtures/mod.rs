//! Test fixtures for HTTP API integration tests.

use std::sync::Arc;

use weather_news_rs::{
    domain::{CityId, Timestamp, WeatherRecord, WeatherStore},
    infrastructure::repository::InMemoryWeatherTable,
    ui::{router::build_router, state::AppState},
};

/// A weather API server running on a local port for the duration of a test.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start a server seeded with the default test records.
    pub fn start(port: u16) -> Self {
        Self::start_with_records(port, seed_records())
    }

    /// Start a server whose table holds no records.
    pub fn start_empty(port: u16) -> Self {
        Self::start_with_records(port, Vec::new())
    }

    /// Start a server with the given records.
    pub fn start_with_records(port: u16, records: Vec<WeatherRecord>) -> Self {
        let store: Arc<dyn WeatherStore> = Arc::new(InMemoryWeatherTable::from_records(records));
        let state = Arc::new(AppState { store });
        let router = build_router(state);

        // Bind synchronously so the port accepts connections before the
        // test body sends its first request.
        let listener =
            std::net::TcpListener::bind(("127.0.0.1", port)).expect("Failed to bind test port");
        listener
            .set_nonblocking(true)
            .expect("Failed to set listener non-blocking");

        tokio::spawn(async move {
            let listener = tokio::net::TcpListener::from_std(listener)
                .expect("Failed to convert test listener");
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        Self { port }
    }

    /// Base URL of the running server.
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

/// Default seed records used by the integration tests.
pub fn seed_records() -> Vec<WeatherRecord> {
    vec![
        record("tokyo", "Tokyo", "sunny", 28.5, 55, 3.2),
        record("osaka", "Osaka", "rain", 24.0, 80, 5.0),
        record("sapporo", "Sapporo", "snow", -2.0, 70, 4.1),
    ]
}

fn record(
    city_id: &str,
    city_name: &str,
    condition: &str,
    temperature_c: f64,
    humidity_pct: u8,
    wind_speed_mps: f64,
) -> WeatherRecord {
    WeatherRecord::new(
        CityId::new(city_id.to_string()).expect("Invalid test city id"),
        city_name.to_string(),
        condition.to_string(),
        temperature_c,
        humidity_pct,
        wind_speed_mps,
        Timestamp::new(1672498800000), // 2023-01-01 00:00:00 JST
    )
}
