//! Server state shared across request handlers.

use std::sync::Arc;

use crate::domain::WeatherStore;

/// Shared application state
pub struct AppState {
    /// Store（データアクセス層の抽象化、読み取り専用）
    pub store: Arc<dyn WeatherStore>,
}
