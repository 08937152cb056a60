//! UseCase: 特定都市の天気データ取得処理（閲覧者用）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetCityWeatherUseCase::execute() メソッド
//! - 都市 ID による単一レコードの取得
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：存在しない都市 ID は CityNotFound になる
//! - ストア障害と「レコードなし」が区別されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済み都市のレコード取得
//! - 異常系：ストアが利用不可
//! - エッジケース：未登録の都市 ID

use std::sync::Arc;

use crate::domain::{CityId, WeatherRecord, WeatherStore};

use super::error::GetCityWeatherError;

/// 特定都市の天気データ取得のユースケース
pub struct GetCityWeatherUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn WeatherStore>,
}

impl GetCityWeatherUseCase {
    /// 新しい GetCityWeatherUseCase を作成
    pub fn new(store: Arc<dyn WeatherStore>) -> Self {
        Self { store }
    }

    /// 特定都市の天気データ取得を実行
    ///
    /// # Arguments
    ///
    /// * `city_id` - 取得対象の都市 ID（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(WeatherRecord)` - 該当都市の天気レコード
    /// * `Err(GetCityWeatherError)` - 取得失敗（未登録の都市を含む）
    pub async fn execute(&self, city_id: CityId) -> Result<WeatherRecord, GetCityWeatherError> {
        // 1. Store 経由で単一キー取得
        let record = self.store.get_item(&city_id).await?;

        // 2. レコードなしは NotFound として区別する
        record.ok_or_else(|| GetCityWeatherError::CityNotFound(city_id.into_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{StoreError, Timestamp, repository::MockWeatherStore},
        infrastructure::repository::InMemoryWeatherTable,
    };

    fn record(city_id: &str, condition: &str) -> WeatherRecord {
        WeatherRecord::new(
            CityId::new(city_id.to_string()).unwrap(),
            city_id.to_string(),
            condition.to_string(),
            20.0,
            50,
            2.0,
            Timestamp::new(1672498800000),
        )
    }

    #[tokio::test]
    async fn test_get_city_weather_success() {
        // テスト項目: 登録済み都市のレコードを取得できる
        // given (前提条件):
        let table = InMemoryWeatherTable::from_records(vec![
            record("tokyo", "sunny"),
            record("osaka", "rain"),
        ]);
        let usecase = GetCityWeatherUseCase::new(Arc::new(table));
        let city_id = CityId::new("osaka".to_string()).unwrap();

        // when (操作):
        let result = usecase.execute(city_id).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let record = result.unwrap();
        assert_eq!(record.city_id.as_str(), "osaka");
        assert_eq!(record.condition, "rain");
    }

    #[tokio::test]
    async fn test_get_city_weather_not_found() {
        // テスト項目: 未登録の都市 ID は CityNotFound エラーになる
        // given (前提条件):
        let table = InMemoryWeatherTable::from_records(vec![record("tokyo", "sunny")]);
        let usecase = GetCityWeatherUseCase::new(Arc::new(table));
        let city_id = CityId::new("paris".to_string()).unwrap();

        // when (操作):
        let result = usecase.execute(city_id).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GetCityWeatherError::CityNotFound("paris".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_city_weather_malformed_item() {
        // テスト項目: 壊れたレコードは Store エラーになる（NotFound とは区別される）
        // given (前提条件):
        let mut store = MockWeatherStore::new();
        store.expect_get_item().returning(|_| {
            Err(StoreError::MalformedItem {
                city_id: "tokyo".to_string(),
                reason: "missing attribute 'condition'".to_string(),
            })
        });
        let usecase = GetCityWeatherUseCase::new(Arc::new(store));
        let city_id = CityId::new("tokyo".to_string()).unwrap();

        // when (操作):
        let result = usecase.execute(city_id).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GetCityWeatherError::Store(StoreError::MalformedItem {
                city_id: "tokyo".to_string(),
                reason: "missing attribute 'condition'".to_string(),
            }))
        );
    }
}
