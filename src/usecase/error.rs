//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::StoreError;

/// 全天気データ取得時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetAllWeatherError {
    /// ストアへのアクセスに失敗した
    #[error("Failed to scan weather store: {0}")]
    Store(#[from] StoreError),
}

/// 特定都市の天気データ取得時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetCityWeatherError {
    /// 指定された都市 ID のレコードが存在しない
    #[error("No weather record for city '{0}'")]
    CityNotFound(String),

    /// ストアへのアクセスに失敗した
    #[error("Failed to read weather store: {0}")]
    Store(#[from] StoreError),
}
