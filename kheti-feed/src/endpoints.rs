//! URLs das APIs remotas

/// Base da API ThingSpeak
pub const THINGSPEAK_BASE: &str = "https://api.thingspeak.com";

/// Endpoint de previsão Open-Meteo (sem chave)
pub const OPEN_METEO_FORECAST: &str = "https://api.open-meteo.com/v1/forecast";

/// Variáveis pedidas no bloco `current`
pub const CURRENT_VARIABLES: &str = "temperature_2m,weather_code";

/// URL de `feeds.json` de um canal (sem query string)
pub fn channel_feeds_url(channel_id: &str) -> String {
    format!("{THINGSPEAK_BASE}/channels/{channel_id}/feeds.json")
}

/// Parâmetros de consulta do feed; a chave de leitura só entra se existir
pub fn channel_feeds_query(results: u32, read_api_key: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(2);
    if let Some(key) = read_api_key {
        query.push(("api_key", key.to_string()));
    }
    query.push(("results", results.to_string()));
    query
}

/// URL completa da previsão atual para uma coordenada
pub fn forecast_url(latitude: f64, longitude: f64) -> String {
    format!("{OPEN_METEO_FORECAST}?latitude={latitude}&longitude={longitude}&current={CURRENT_VARIABLES}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_url() {
        assert_eq!(
            channel_feeds_url("3074280"),
            "https://api.thingspeak.com/channels/3074280/feeds.json"
        );
    }

    #[test]
    fn test_channel_query() {
        assert_eq!(channel_feeds_query(100, None), vec![("results", "100".to_string())]);
        let query = channel_feeds_query(50, Some("KEY"));
        assert_eq!(query[0], ("api_key", "KEY".to_string()));
        assert_eq!(query[1], ("results", "50".to_string()));
    }

    #[test]
    fn test_forecast_url() {
        assert_eq!(
            forecast_url(21.1458, 79.0882),
            "https://api.open-meteo.com/v1/forecast?latitude=21.1458&longitude=79.0882&current=temperature_2m,weather_code"
        );
    }
}
