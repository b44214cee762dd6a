//! # 📡 kheti-feed - Coleta e Snapshot do Painel
//!
//! Camada de coleta do painel da horta. Decodifica o feed ThingSpeak e a
//! previsão Open-Meteo, converte campos em leituras tipadas e monta os tiles
//! de métricas usando o motor de `kheti-core`.
//!
//! ## Fluxo
//!
//! ```text
//! feeds.json ──▶ parse_channel ──▶ FarmData ──┐
//!                                             ├──▶ Dashboard::build ──▶ tiles
//! forecast   ──▶ parse_current_weather ───────┘
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use kheti_feed::{parse_channel, Dashboard, DashboardConfig, FieldMapping};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{"feeds": [{"created_at": "2025-09-01T06:00:00Z", "field1": "22.5"}]}"#;
//! let farm = parse_channel(json, &FieldMapping::default())?;
//! let dashboard = Dashboard::build(&farm, None, &DashboardConfig::default());
//!
//! assert_eq!(dashboard.tiles[0].to_string(), "Farm Temperature: 22.50 °C (Optimal)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `http`: cliente bloqueante ([`client`]) via `ureq`

pub mod error;
pub mod endpoints;
pub mod config;
pub mod thingspeak;
pub mod weather;
pub mod dashboard;
#[cfg(feature = "http")]
pub mod client;

// Re-exportar tipos principais
pub use error::{FeedError, FeedResult};
pub use config::DashboardConfig;
pub use thingspeak::{parse_channel, ChannelInfo, FarmData, Feed, FieldMapping, SeriesPoint};
pub use weather::{parse_current_weather, CurrentWeather};
pub use dashboard::{Dashboard, MetricTile, NOT_AVAILABLE};
