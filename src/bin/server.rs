//! Public weather-lookup API server.
//!
//! Serves all weather records at `GET /all` and a single city's record at
//! `GET /{city_id}` from an in-memory table seeded at startup.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server -- --seed-file seed/weather.json
//! ```

use std::path::PathBuf;

use clap::Parser;

use weather_news_rs::{logger::setup_logger, ui::config::ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "weather-news-server", about = "Public weather-lookup HTTP API")]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// JSON file with weather records to serve
    #[arg(long)]
    seed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        seed_file: args.seed_file,
    };

    // Run the server
    if let Err(e) = weather_news_rs::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
