//! Vocabulário de sensores da horta

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Grandeza medida por um sensor da horta
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Temperature,
    Humidity,
    SoilMoisture,
    Ph,
}

impl SensorKind {
    /// Todos os sensores, na ordem dos campos do canal
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Humidity, Self::SoilMoisture, Self::Ph];

    /// Nome da coluna na tabela de leituras
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::SoilMoisture => "Soil_Moisture",
            Self::Ph => "pH",
        }
    }

    /// Unidade de exibição
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity | Self::SoilMoisture => "%",
            Self::Ph => "",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for SensorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Ok(Self::Temperature),
            "humidity" => Ok(Self::Humidity),
            "soil_moisture" | "soil-moisture" | "soilmoisture" | "moisture" => Ok(Self::SoilMoisture),
            "ph" => Ok(Self::Ph),
            _ => Err(CoreError::UnknownSensor(s.to_string())),
        }
    }
}

/// Uma leitura de cada sensor (ausente quando o campo não veio no feed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Temperatura em °C
    pub temperature: Option<f64>,
    /// Umidade relativa em %
    pub humidity: Option<f64>,
    /// Umidade do solo (bruta ou já em %)
    pub soil_moisture: Option<f64>,
    pub ph: Option<f64>,
}

impl SensorSnapshot {
    pub fn get(&self, kind: SensorKind) -> Option<f64> {
        match kind {
            SensorKind::Temperature => self.temperature,
            SensorKind::Humidity => self.humidity,
            SensorKind::SoilMoisture => self.soil_moisture,
            SensorKind::Ph => self.ph,
        }
    }

    pub fn set(&mut self, kind: SensorKind, value: Option<f64>) {
        let slot = match kind {
            SensorKind::Temperature => &mut self.temperature,
            SensorKind::Humidity => &mut self.humidity,
            SensorKind::SoilMoisture => &mut self.soil_moisture,
            SensorKind::Ph => &mut self.ph,
        };
        *slot = value;
    }

    /// Retorna cópia com o valor de `kind` substituído
    pub fn with(mut self, kind: SensorKind, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    pub fn is_empty(&self) -> bool {
        SensorKind::ALL.iter().all(|&k| self.get(k).is_none())
    }
}
