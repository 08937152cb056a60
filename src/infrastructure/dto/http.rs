//! HTTP API response DTOs for the weather API.

use serde::{Deserialize, Serialize};

use crate::{domain::WeatherRecord, time::timestamp_to_jst_rfc3339};

/// Weather record as exposed over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecordDto {
    pub city_id: String,
    pub city_name: String,
    pub condition: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observed_at: String, // ISO 8601
}

impl WeatherRecordDto {
    /// Build a response DTO from a domain record.
    pub fn from_record(record: &WeatherRecord) -> Self {
        Self {
            city_id: record.city_id.as_str().to_string(),
            city_name: record.city_name.clone(),
            condition: record.condition.clone(),
            temperature_c: record.temperature_c,
            humidity_pct: record.humidity_pct,
            wind_speed_mps: record.wind_speed_mps,
            observed_at: timestamp_to_jst_rfc3339(record.observed_at.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityId, Timestamp};

    #[test]
    fn test_from_record() {
        // テスト項目: ドメインレコードから DTO を構築できる
        // given (前提条件):
        let record = WeatherRecord::new(
            CityId::new("tokyo".to_string()).unwrap(),
            "Tokyo".to_string(),
            "sunny".to_string(),
            28.5,
            55,
            3.2,
            Timestamp::new(1672498800000),
        );

        // when (操作):
        let dto = WeatherRecordDto::from_record(&record);

        // then (期待する結果):
        assert_eq!(dto.city_id, "tokyo");
        assert_eq!(dto.city_name, "Tokyo");
        assert_eq!(dto.condition, "sunny");
        assert_eq!(dto.humidity_pct, 55);
        // 2023-01-01 00:00:00 JST
        assert!(dto.observed_at.starts_with("2023-01-01T00:00:00"));
    }
}
