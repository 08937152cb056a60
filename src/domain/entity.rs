//! Core domain models for the weather API.

use serde::{Deserialize, Serialize};

use super::value_object::{CityId, Timestamp};

/// Represents the current weather observation for a single city.
///
/// Each city id maps to at most one current record; the store keeps only
/// the latest observation per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// City identifier (table key)
    pub city_id: CityId,
    /// Human-readable city name
    pub city_name: String,
    /// Textual weather condition (e.g. "sunny", "rain")
    pub condition: String,
    /// Air temperature in degrees Celsius
    pub temperature_c: f64,
    /// Relative humidity in percent
    pub humidity_pct: u8,
    /// Wind speed in meters per second
    pub wind_speed_mps: f64,
    /// Timestamp of the observation (Unix millis, JST)
    pub observed_at: Timestamp,
}

impl WeatherRecord {
    /// Create a new weather record.
    pub fn new(
        city_id: CityId,
        city_name: String,
        condition: String,
        temperature_c: f64,
        humidity_pct: u8,
        wind_speed_mps: f64,
        observed_at: Timestamp,
    ) -> Self {
        Self {
            city_id,
            city_name,
            condition,
            temperature_c,
            humidity_pct,
            wind_speed_mps,
            observed_at,
        }
    }
}
