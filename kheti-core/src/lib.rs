//! # 🌱 kheti-core - Motor de Interpretação de Sensores
//!
//! Núcleo puro do painel da horta de telhado: transforma leituras brutas em
//! valores calibrados e rótulos qualitativos. Não busca dados, não desenha
//! nada e não guarda estado.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────┐   escalares   ┌─────────────────────────┐   valores/rótulos   ┌──────────────┐
//! │ kheti-feed   │ ────────────▶ │ kheti-core              │ ──────────────────▶ │ apresentação │
//! │ (ThingSpeak, │               │  calibration · bands    │                     │ (CLI, tiles) │
//! │  Open-Meteo) │               │  weather · interpret    │                     │              │
//! └──────────────┘               └─────────────────────────┘                     └──────────────┘
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use kheti_core::prelude::*;
//!
//! let cal = MoistureCalibration::new(3500.0, 1500.0);
//! assert_eq!(cal.percentage(2500.0), 50.0);
//!
//! assert_eq!(classify_temperature(22.0), "Optimal");
//! assert_eq!(classify_ph(7.0), "Neutral");
//! assert_eq!(describe_weather(999), ("Unknown", ""));
//! ```
//!
//! ## Módulos
//!
//! - [`calibration`] - Umidade do solo a partir dos limites seco/molhado
//! - [`bands`] - Faixas de temperatura, umidade e pH
//! - [`weather`] - Códigos WMO
//! - [`sensor`] - Vocabulário de sensores
//! - [`interpret`] - Interpretação de um snapshot completo
//! - [`stats`] - Estatística descritiva
//! - [`error`] - Tratamento de erros

pub mod error;
pub mod calibration;
pub mod bands;
pub mod weather;
pub mod sensor;
pub mod interpret;
pub mod stats;
pub mod prelude;

// Re-exportar tipos principais
pub use error::{CoreError, CoreResult};
pub use calibration::{calibrate, MoistureCalibration};
pub use bands::{
    classify_humidity, classify_ph, classify_temperature, HumidityBand, PhBand, TemperatureBand,
};
pub use weather::{describe_weather, WeatherCondition};
pub use sensor::{SensorKind, SensorSnapshot};
pub use interpret::{interpret, Banded, Interpretation};
pub use stats::{describe, DescriptiveStats};

#[cfg(test)]
mod tests;
