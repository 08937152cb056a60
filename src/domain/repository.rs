//! Weather store trait (read-only boundary).
//!
//! ドメイン層が定義するデータアクセスの抽象化。UI 層・UseCase 層は
//! この trait 経由でのみテーブルへアクセスします（依存性の逆転）。
//!
//! この trait は読み取り専用です。公開側（閲覧者用 API）にはスキャンと
//! 単一キー取得の 2 操作だけを許可し、書き込み操作は trait 上に存在
//! しないため境界を越えられません。

use async_trait::async_trait;

use super::{
    entity::WeatherRecord,
    error::StoreError,
    value_object::CityId,
};

/// Read-only access to the weather record table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// Return every weather record in the table.
    ///
    /// The order of returned records is unspecified at this boundary;
    /// callers that need a stable order must sort.
    async fn scan(&self) -> Result<Vec<WeatherRecord>, StoreError>;

    /// Return the weather record for the given city id, if present.
    async fn get_item(&self, city_id: &CityId) -> Result<Option<WeatherRecord>, StoreError>;
}
