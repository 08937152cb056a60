//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::CityId,
    infrastructure::dto::http::WeatherRecordDto,
    ui::state::AppState,
    usecase::{GetAllWeatherUseCase, GetCityWeatherError, GetCityWeatherUseCase},
};

/// Get all weather records (GET /all)
pub async fn get_all_weather(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WeatherRecordDto>>, StatusCode> {
    let usecase = GetAllWeatherUseCase::new(state.store.clone());

    match usecase.execute().await {
        Ok(records) => Ok(Json(
            records.iter().map(WeatherRecordDto::from_record).collect(),
        )),
        Err(e) => {
            tracing::error!("Failed to get all weather records: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get the weather record for one city (GET /{city_id})
pub async fn get_city_weather(
    State(state): State<Arc<AppState>>,
    Path(city_id): Path<String>,
) -> Result<Json<WeatherRecordDto>, StatusCode> {
    // Convert String -> CityId (Domain Model)
    let city_id = match CityId::try_from(city_id.clone()) {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("Invalid city_id format: '{}'", city_id);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let usecase = GetCityWeatherUseCase::new(state.store.clone());

    match usecase.execute(city_id).await {
        Ok(record) => Ok(Json(WeatherRecordDto::from_record(&record))),
        Err(GetCityWeatherError::CityNotFound(id)) => {
            tracing::debug!("No weather record for city '{}'", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(GetCityWeatherError::Store(e)) => {
            tracing::error!("Failed to get city weather: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
