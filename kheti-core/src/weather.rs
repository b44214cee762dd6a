//! Tradução de códigos meteorológicos WMO
//!
//! Subconjunto de códigos devolvidos pelo Open-Meteo em `weather_code`.
//! Qualquer código fora da tabela vira `("Unknown", "")`.

use serde::{Deserialize, Serialize};

/// Descrição para códigos não mapeados
pub const UNKNOWN_WEATHER: (&str, &str) = ("Unknown", "");

/// Condição meteorológica identificada por um código WMO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    DepositingRimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    SlightRainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    Thunderstorm,
}

impl WeatherCondition {
    /// Todas as condições conhecidas, em ordem crescente de código
    pub const ALL: [Self; 16] = [
        Self::ClearSky,
        Self::MainlyClear,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Fog,
        Self::DepositingRimeFog,
        Self::LightDrizzle,
        Self::ModerateDrizzle,
        Self::DenseDrizzle,
        Self::SlightRain,
        Self::ModerateRain,
        Self::HeavyRain,
        Self::SlightRainShowers,
        Self::ModerateRainShowers,
        Self::ViolentRainShowers,
        Self::Thunderstorm,
    ];

    /// Procura a condição de um código WMO
    pub fn from_code(code: i64) -> Option<Self> {
        let condition = match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            80 => Self::SlightRainShowers,
            81 => Self::ModerateRainShowers,
            82 => Self::ViolentRainShowers,
            95 => Self::Thunderstorm,
            _ => return None,
        };
        Some(condition)
    }

    /// Código WMO da condição
    pub fn code(&self) -> i64 {
        match self {
            Self::ClearSky => 0,
            Self::MainlyClear => 1,
            Self::PartlyCloudy => 2,
            Self::Overcast => 3,
            Self::Fog => 45,
            Self::DepositingRimeFog => 48,
            Self::LightDrizzle => 51,
            Self::ModerateDrizzle => 53,
            Self::DenseDrizzle => 55,
            Self::SlightRain => 61,
            Self::ModerateRain => 63,
            Self::HeavyRain => 65,
            Self::SlightRainShowers => 80,
            Self::ModerateRainShowers => 81,
            Self::ViolentRainShowers => 82,
            Self::Thunderstorm => 95,
        }
    }

    /// Descrição em inglês, como exibida no painel
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::DepositingRimeFog => "Depositing rime fog",
            Self::LightDrizzle => "Light drizzle",
            Self::ModerateDrizzle => "Moderate drizzle",
            Self::DenseDrizzle => "Dense drizzle",
            Self::SlightRain => "Slight rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::SlightRainShowers => "Slight rain showers",
            Self::ModerateRainShowers => "Moderate rain showers",
            Self::ViolentRainShowers => "Violent rain showers",
            Self::Thunderstorm => "Thunderstorm",
        }
    }

    /// Emoji decorativo
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog | Self::DepositingRimeFog => "🌫️",
            Self::LightDrizzle | Self::ModerateDrizzle | Self::DenseDrizzle => "🌦️",
            Self::SlightRain | Self::ModerateRain | Self::HeavyRain => "🌧️",
            Self::SlightRainShowers | Self::ModerateRainShowers | Self::ViolentRainShowers => "⛈️",
            Self::Thunderstorm => "🌩️",
        }
    }
}

/// Descrição e emoji de um código WMO. Nunca falha.
pub fn describe_weather(code: i64) -> (&'static str, &'static str) {
    WeatherCondition::from_code(code)
        .map(|c| (c.description(), c.symbol()))
        .unwrap_or(UNKNOWN_WEATHER)
}
