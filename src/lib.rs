//! Public weather-lookup HTTP API library.
//!
//! This library implements a small read-only weather API: weather records
//! live in a keyed table, and two GET endpoints expose them (the full list,
//! and a single record by city id).

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run as run_server;
