//! Router construction for the public weather API.

use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handler, state::AppState};

/// Build the public router.
///
/// The API surface is exactly two GET routes; no other method is exposed.
/// Cross-origin GET requests are allowed from any origin, matching the
/// public (unauthenticated) nature of this API.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        // GET /all エンドポイント（全天気データ取得）
        .route("/all", get(handler::get_all_weather))
        // GET /{city_id} エンドポイント（特定都市の天気データ取得）
        .route("/{city_id}", get(handler::get_city_weather))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
