//! シードファイルの読み込み
//!
//! レコードのライフサイクル（書き込み・更新・削除）はこのサービスの
//! 外側で管理されます。シードファイルは、起動したプロセスが配信できる
//! データを持つための初期投入手段で、起動後に読み込まれることは
//! ありません。
//!
//! フォーマットは天気レコードの JSON 配列です:
//!
//! ```json
//! [
//!   {
//!     "city_id": "tokyo",
//!     "city_name": "Tokyo",
//!     "condition": "sunny",
//!     "temperature_c": 28.5,
//!     "humidity_pct": 55,
//!     "wind_speed_mps": 3.2,
//!     "observed_at": 1672498800000
//!   }
//! ]
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{CityId, Timestamp, ValueObjectError, WeatherRecord};

/// シード読み込み時のエラー
#[derive(Debug, Error)]
pub enum SeedError {
    /// ファイルの読み込みに失敗した
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON のパースに失敗した
    #[error("Failed to parse seed file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// 都市 ID のバリデーションに失敗した
    #[error("Invalid city id in seed file: {0}")]
    InvalidCityId(#[from] ValueObjectError),
}

/// シードファイル上の 1 レコード
///
/// ドメインモデルとは分離した、ファイルフォーマット専用の型。
#[derive(Debug, Deserialize)]
struct SeedRecord {
    city_id: String,
    city_name: String,
    condition: String,
    temperature_c: f64,
    humidity_pct: u8,
    wind_speed_mps: f64,
    /// Unix millis (JST)
    observed_at: i64,
}

impl SeedRecord {
    fn into_domain(self) -> Result<WeatherRecord, ValueObjectError> {
        Ok(WeatherRecord::new(
            CityId::new(self.city_id)?,
            self.city_name,
            self.condition,
            self.temperature_c,
            self.humidity_pct,
            self.wind_speed_mps,
            Timestamp::new(self.observed_at),
        ))
    }
}

/// シードファイルを読み込み、ドメインレコードのリストに変換する
pub fn load_seed_records(path: &Path) -> Result<Vec<WeatherRecord>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_seed_records(&contents, &path.display().to_string())
}

/// JSON 文字列からシードレコードをパースする
///
/// `origin` はエラーメッセージ用のソース名（ファイルパスなど）。
pub fn parse_seed_records(contents: &str, origin: &str) -> Result<Vec<WeatherRecord>, SeedError> {
    let seed_records: Vec<SeedRecord> =
        serde_json::from_str(contents).map_err(|source| SeedError::Parse {
            path: origin.to_string(),
            source,
        })?;

    seed_records
        .into_iter()
        .map(|record| record.into_domain().map_err(SeedError::from))
        .collect()
}
