//! Store implementations for the domain's `WeatherStore` trait.

pub mod inmemory;

pub use inmemory::InMemoryWeatherTable;
