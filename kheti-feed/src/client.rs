//! Cliente HTTP bloqueante (feature `http`)
//!
//! Uma requisição por chamada, sem retry e sem cache. As variantes
//! `*_or_empty` falham fechado: registram o erro e devolvem "sem dados",
//! deixando o painel mostrar `N/A`.

use crate::config::DashboardConfig;
use crate::endpoints::{channel_feeds_query, channel_feeds_url, forecast_url};
use crate::error::{FeedError, FeedResult};
use crate::thingspeak::{parse_channel, FarmData};
use crate::weather::{parse_current_weather, CurrentWeather};

fn read_body(request: ureq::Request, url: &str) -> FeedResult<String> {
    let response = request.call().map_err(|e| match e {
        ureq::Error::Status(status, _) => FeedError::Status {
            url: url.to_string(),
            status,
        },
        other => FeedError::Http {
            url: url.to_string(),
            message: other.to_string(),
        },
    })?;

    Ok(response.into_string()?)
}

/// Busca os últimos `config.results` registros do canal
pub fn fetch_farm_data(config: &DashboardConfig) -> FeedResult<FarmData> {
    let url = channel_feeds_url(&config.channel_id);
    let mut request = ureq::get(&url);
    for (name, value) in channel_feeds_query(config.results, config.read_api_key.as_deref()) {
        request = request.query(name, &value);
    }

    tracing::info!(channel = %config.channel_id, results = config.results, "fetching ThingSpeak feed");
    let body = read_body(request, &url)?;
    parse_channel(&body, &config.field_mapping)
}

/// Busca o clima atual na coordenada configurada
pub fn fetch_current_weather(config: &DashboardConfig) -> FeedResult<Option<CurrentWeather>> {
    let url = forecast_url(config.latitude, config.longitude);
    tracing::info!(city = %config.city_name, "fetching Open-Meteo current weather");
    let body = read_body(ureq::get(&url), &url)?;
    parse_current_weather(&body)
}

/// Como [`fetch_farm_data`], mas devolve tabela vazia em caso de erro
pub fn fetch_farm_data_or_empty(config: &DashboardConfig) -> FarmData {
    fetch_farm_data(config).unwrap_or_else(|e| {
        tracing::error!("Error fetching data from ThingSpeak: {e}");
        FarmData::empty()
    })
}

/// Como [`fetch_current_weather`], mas devolve `None` em caso de erro
pub fn fetch_current_weather_or_empty(config: &DashboardConfig) -> Option<CurrentWeather> {
    fetch_current_weather(config).unwrap_or_else(|e| {
        tracing::error!("Error fetching weather data: {e}");
        None
    })
}
