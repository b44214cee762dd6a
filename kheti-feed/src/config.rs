//! Configuração do painel a partir de `.env` ou variáveis de ambiente
//!
//! | Variável | Padrão |
//! |:---------|:-------|
//! | `KHETI_CHANNEL_ID` | `3074280` |
//! | `KHETI_READ_API_KEY` | (nenhuma) |
//! | `KHETI_RESULTS` | `100` |
//! | `KHETI_LATITUDE` / `KHETI_LONGITUDE` | Nagpur (21.1458, 79.0882) |
//! | `KHETI_CITY` | `Nagpur` |
//! | `KHETI_SOIL_DRY` / `KHETI_SOIL_WET` | sem calibração |
//! | `KHETI_FIELD_TEMPERATURE`, `_HUMIDITY`, `_SOIL_MOISTURE`, `_PH` | `field1`..`field4` |
//!
//! O motor de interpretação nunca lê estas variáveis: a configuração é
//! carregada aqui e passada explicitamente.

use std::env;
use std::str::FromStr;

use kheti_core::{MoistureCalibration, SensorKind};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};
use crate::thingspeak::FieldMapping;

// Carrega o .env uma única vez por processo
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Máximo de registros aceito por `feeds.json`
pub const MAX_RESULTS: u32 = 8000;

pub const ENV_CHANNEL_ID: &str = "KHETI_CHANNEL_ID";
pub const ENV_READ_API_KEY: &str = "KHETI_READ_API_KEY";
pub const ENV_RESULTS: &str = "KHETI_RESULTS";
pub const ENV_LATITUDE: &str = "KHETI_LATITUDE";
pub const ENV_LONGITUDE: &str = "KHETI_LONGITUDE";
pub const ENV_CITY: &str = "KHETI_CITY";
pub const ENV_SOIL_DRY: &str = "KHETI_SOIL_DRY";
pub const ENV_SOIL_WET: &str = "KHETI_SOIL_WET";

fn field_env(kind: SensorKind) -> &'static str {
    match kind {
        SensorKind::Temperature => "KHETI_FIELD_TEMPERATURE",
        SensorKind::Humidity => "KHETI_FIELD_HUMIDITY",
        SensorKind::SoilMoisture => "KHETI_FIELD_SOIL_MOISTURE",
        SensorKind::Ph => "KHETI_FIELD_PH",
    }
}

/// Configuração da coleta e do painel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Canal ThingSpeak
    pub channel_id: String,
    /// Chave de leitura (canais privados)
    pub read_api_key: Option<String>,
    /// Número de registros pedidos
    pub results: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Nome exibido no tile de clima
    pub city_name: String,
    /// Limites do sensor de umidade do solo; `None` = feed já em %
    pub calibration: Option<MoistureCalibration>,
    pub field_mapping: FieldMapping,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            channel_id: "3074280".into(),
            read_api_key: None,
            results: 100,
            latitude: 21.1458,
            longitude: 79.0882,
            city_name: "Nagpur".into(),
            calibration: None,
            field_mapping: FieldMapping::default(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> FeedResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| FeedError::InvalidConfig(format!("{key}: cannot parse '{raw}'")))
}

impl DashboardConfig {
    /// Carrega `.env` (se existir) e lê as variáveis `KHETI_*`
    pub fn from_env() -> FeedResult<Self> {
        ensure_loaded();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::debug!(
            channel = %config.channel_id,
            results = config.results,
            calibrated = config.calibration.is_some(),
            "dashboard configuration loaded"
        );
        Ok(config)
    }

    /// Monta a configuração a partir de uma função de consulta chave → valor
    pub fn from_lookup<F>(lookup: F) -> FeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(id) = get(ENV_CHANNEL_ID) {
            config.channel_id = id.trim().to_string();
        }
        config.read_api_key = get(ENV_READ_API_KEY).map(|k| k.trim().to_string());
        if let Some(raw) = get(ENV_RESULTS) {
            config.results = parse_var(ENV_RESULTS, &raw)?;
        }
        if let Some(raw) = get(ENV_LATITUDE) {
            config.latitude = parse_var(ENV_LATITUDE, &raw)?;
        }
        if let Some(raw) = get(ENV_LONGITUDE) {
            config.longitude = parse_var(ENV_LONGITUDE, &raw)?;
        }
        if let Some(city) = get(ENV_CITY) {
            config.city_name = city.trim().to_string();
        }

        config.calibration = match (get(ENV_SOIL_DRY), get(ENV_SOIL_WET)) {
            (Some(dry), Some(wet)) => Some(MoistureCalibration::checked(
                parse_var(ENV_SOIL_DRY, &dry)?,
                parse_var(ENV_SOIL_WET, &wet)?,
            )?),
            (None, None) => None,
            _ => {
                return Err(FeedError::InvalidConfig(format!(
                    "{ENV_SOIL_DRY} and {ENV_SOIL_WET} must be set together"
                )));
            }
        };

        for kind in SensorKind::ALL {
            if let Some(field) = get(field_env(kind)) {
                config.field_mapping = config.field_mapping.with(field.trim(), kind);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Substitui a calibração (por exemplo, a partir de argumentos da CLI)
    pub fn with_calibration(mut self, calibration: Option<MoistureCalibration>) -> Self {
        self.calibration = calibration;
        self
    }

    /// Verifica limites e formatos
    pub fn validate(&self) -> FeedResult<()> {
        if self.channel_id.is_empty() || !self.channel_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(FeedError::InvalidConfig(format!(
                "channel id must be numeric, got '{}'",
                self.channel_id
            )));
        }

        if !(1..=MAX_RESULTS).contains(&self.results) {
            return Err(FeedError::InvalidConfig(format!(
                "results must be in 1..={MAX_RESULTS}, got {}",
                self.results
            )));
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(FeedError::InvalidConfig(format!("latitude out of range: {}", self.latitude)));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(FeedError::InvalidConfig(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }

        if let Some(cal) = self.calibration {
            MoistureCalibration::checked(cal.dry_value, cal.wet_value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.results, 100);
        assert_eq!(config.city_name, "Nagpur");
        assert!(config.calibration.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_CHANNEL_ID, "12345"),
            (ENV_READ_API_KEY, " ABCDEF "),
            (ENV_RESULTS, "250"),
            (ENV_CITY, "Pune"),
            (ENV_LATITUDE, "18.52"),
            (ENV_LONGITUDE, "73.85"),
            (ENV_SOIL_DRY, "3300"),
            (ENV_SOIL_WET, "1250"),
            ("KHETI_FIELD_PH", "field6"),
        ]))
        .unwrap();

        assert_eq!(config.channel_id, "12345");
        assert_eq!(config.read_api_key.as_deref(), Some("ABCDEF"));
        assert_eq!(config.results, 250);
        assert_eq!(config.city_name, "Pune");
        assert_eq!(config.calibration, Some(MoistureCalibration::new(3300.0, 1250.0)));
        assert_eq!(config.field_mapping.field_for(SensorKind::Ph), Some("field6"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = DashboardConfig::from_lookup(lookup_from(&[(ENV_READ_API_KEY, "  ")])).unwrap();
        assert!(config.read_api_key.is_none());
    }

    #[test]
    fn test_half_calibration_rejected() {
        let result = DashboardConfig::from_lookup(lookup_from(&[(ENV_SOIL_DRY, "3300")]));
        assert!(matches!(result, Err(FeedError::InvalidConfig(_))));
    }

    #[test]
    fn test_equal_calibration_rejected() {
        let result = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_SOIL_DRY, "2000"),
            (ENV_SOIL_WET, "2000"),
        ]));
        assert!(matches!(result, Err(FeedError::Core(_))));
    }

    #[test]
    fn test_unparsable_number() {
        let result = DashboardConfig::from_lookup(lookup_from(&[(ENV_RESULTS, "lots")]));
        assert!(result.unwrap_err().to_string().contains(ENV_RESULTS));
    }

    #[test]
    fn test_validate_ranges() {
        let config = DashboardConfig {
            results: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = DashboardConfig {
            latitude: 91.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = DashboardConfig {
            channel_id: "abc".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
