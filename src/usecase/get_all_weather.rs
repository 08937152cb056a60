//! UseCase: 全天気データ取得処理（閲覧者用）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetAllWeatherUseCase::execute() メソッド
//! - 全天気レコードの取得（スキャン、都市 ID 順のソート）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：レスポンスの順序が決定的であること
//! - 空のテーブルがエラーではなく空リストになることを保証
//! - ストア障害時にエラーが UI 層まで伝播することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数レコードの取得とソート
//! - 異常系：ストアが利用不可
//! - エッジケース：レコードが 1 件も存在しない

use std::sync::Arc;

use crate::domain::{WeatherRecord, WeatherStore};

use super::error::GetAllWeatherError;

/// 全天気データ取得のユースケース
pub struct GetAllWeatherUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn WeatherStore>,
}

impl GetAllWeatherUseCase {
    /// 新しい GetAllWeatherUseCase を作成
    pub fn new(store: Arc<dyn WeatherStore>) -> Self {
        Self { store }
    }

    /// 全天気データ取得を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<WeatherRecord>)` - 都市 ID 順にソートされた全レコード
    /// * `Err(GetAllWeatherError)` - 取得失敗
    pub async fn execute(&self) -> Result<Vec<WeatherRecord>, GetAllWeatherError> {
        // 1. Store 経由で全レコードをスキャン
        let mut records = self.store.scan().await?;

        // 2. 都市 ID 順にソート（レスポンスを決定的にするため）
        records.sort_by(|a, b| a.city_id.cmp(&b.city_id));

        Ok(records)
    }
}
