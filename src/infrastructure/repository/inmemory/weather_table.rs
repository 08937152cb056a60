//! InMemory Weather Table 実装
//!
//! ドメイン層が定義する WeatherStore trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! 読み取りは RwLock の read ロック経由で行うため、複数のリクエストが
//! 同時に読み取ってもブロックし合いません。書き込み（シード投入）は
//! trait の外側にある固有メソッドで、起動時にのみ使用されます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{CityId, StoreError, WeatherRecord, WeatherStore};

/// インメモリ Weather Table 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の WeatherStore trait を実装します（依存性の逆転）。
/// キーは都市 ID で、1 都市につき最新の 1 レコードのみ保持します。
pub struct InMemoryWeatherTable {
    /// 都市 ID をキーとする天気レコード
    records: RwLock<HashMap<CityId, WeatherRecord>>,
}

impl InMemoryWeatherTable {
    /// 新しい空の InMemoryWeatherTable を作成
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// 初期レコードを投入済みの InMemoryWeatherTable を作成
    ///
    /// 同じ都市 ID のレコードが複数ある場合は後勝ちで 1 件になります。
    pub fn from_records(records: Vec<WeatherRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.city_id.clone(), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// レコードを 1 件投入（既存キーは置き換え）
    ///
    /// WeatherStore trait の一部ではない固有メソッド。シード投入と
    /// テスト専用で、公開 API の境界からは到達できません。
    pub async fn put_item(&self, record: WeatherRecord) {
        let mut records = self.records.write().await;
        records.insert(record.city_id.clone(), record);
    }

    /// 保持しているレコード数を返す
    pub async fn len(&self) -> usize {
        let records = self.records.read().await;
        records.len()
    }

    /// レコードを 1 件も保持していなければ true
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryWeatherTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherStore for InMemoryWeatherTable {
    async fn scan(&self) -> Result<Vec<WeatherRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get_item(&self, city_id: &CityId) -> Result<Option<WeatherRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(city_id).cloned())
    }
}
