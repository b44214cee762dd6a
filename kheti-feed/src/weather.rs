//! Decodificação da previsão Open-Meteo (`/v1/forecast?current=...`)

use kheti_core::{describe_weather, WeatherCondition};
use serde::{Deserialize, Serialize};

use crate::error::FeedResult;

/// Bloco `current` da resposta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub time: Option<String>,
    /// Temperatura do ar a 2 m (°C)
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    /// Código WMO
    #[serde(default)]
    pub weather_code: Option<i64>,
}

impl CurrentWeather {
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.weather_code.and_then(WeatherCondition::from_code)
    }

    /// Descrição e emoji, ou `None` quando o código não veio
    pub fn describe(&self) -> Option<(&'static str, &'static str)> {
        self.weather_code.map(describe_weather)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<CurrentWeather>,
}

/// Extrai o bloco `current`; ausente quando a API não o devolveu
pub fn parse_current_weather(json: &str) -> FeedResult<Option<CurrentWeather>> {
    let response: ForecastResponse = serde_json::from_str(json)?;
    if response.current.is_none() {
        tracing::warn!("Open-Meteo response has no 'current' block");
    }
    Ok(response.current)
}
