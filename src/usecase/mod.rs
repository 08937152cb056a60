//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod get_all_weather;
pub mod get_city_weather;

pub use error::{GetAllWeatherError, GetCityWeatherError};
pub use get_all_weather::GetAllWeatherUseCase;
pub use get_city_weather::GetCityWeatherUseCase;
