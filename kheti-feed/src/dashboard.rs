//! Snapshot do painel: os tiles de métricas ao vivo
//!
//! Só produz os textos de cada tile. Layout e gráficos ficam com quem exibe.

use std::fmt;

use kheti_core::{interpret, Interpretation};
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::thingspeak::FarmData;
use crate::weather::CurrentWeather;

/// Texto exibido quando não há dado
pub const NOT_AVAILABLE: &str = "N/A";

/// Um tile de métrica
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTile {
    pub label: String,
    /// Valor formatado; `None` quando o dado está ausente
    pub value: Option<String>,
    /// Rótulo qualitativo (faixa), quando existe
    pub band: Option<String>,
}

impl MetricTile {
    fn new(label: impl Into<String>, value: Option<String>, band: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value,
            band: band.map(str::to_string),
        }
    }

    /// Valor formatado ou o marcador `N/A`
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for MetricTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.display_value())?;
        if let Some(band) = &self.band {
            write!(f, " ({band})")?;
        }
        Ok(())
    }
}

/// Estado do painel derivado de uma coleta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub tiles: Vec<MetricTile>,
    pub interpretation: Interpretation,
    /// Registros usados
    pub readings: usize,
}

impl Dashboard {
    /// Monta os tiles a partir das leituras mais recentes e do clima atual
    pub fn build(
        farm: &FarmData,
        weather: Option<&CurrentWeather>,
        config: &DashboardConfig,
    ) -> Self {
        let interpretation = interpret(&farm.latest_snapshot(), config.calibration.as_ref());

        let mut tiles = vec![
            MetricTile::new(
                "Farm Temperature",
                interpretation.temperature.map(|t| format!("{:.2} °C", t.value)),
                interpretation.temperature.map(|t| t.band.label()),
            ),
            MetricTile::new(
                "Humidity",
                interpretation.humidity.map(|h| format!("{:.2} %", h.value)),
                interpretation.humidity.map(|h| h.band.label()),
            ),
            MetricTile::new(
                "Soil Moisture",
                interpretation.soil_moisture.map(|m| format!("{m:.2} %")),
                None,
            ),
            MetricTile::new(
                "pH",
                interpretation.ph.map(|p| format!("{:.2}", p.value)),
                interpretation.ph.map(|p| p.band.label()),
            ),
        ];

        tiles.push(MetricTile::new(
            format!("Weather in {}", config.city_name),
            weather
                .and_then(|w| w.temperature_2m)
                .map(|t| format!("{t:.2} °C")),
            None,
        ));

        tiles.push(MetricTile::new(
            "Condition",
            weather
                .and_then(CurrentWeather::describe)
                .map(|(description, symbol)| format!("{description} {symbol}").trim_end().to_string()),
            None,
        ));

        let available = tiles.iter().filter(|t| t.is_available()).count();
        tracing::debug!(readings = farm.len(), available, total = tiles.len(), "dashboard built");

        Self {
            tiles,
            interpretation,
            readings: farm.len(),
        }
    }

    /// Procura um tile pelo rótulo
    pub fn tile(&self, label: &str) -> Option<&MetricTile> {
        self.tiles.iter().find(|t| t.label == label)
    }

    /// `true` se nenhum tile tem valor
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|t| !t.is_available())
    }
}
