//! Classificadores qualitativos por faixas
//!
//! Cada classificador é uma função total `f64 -> faixa`. As faixas são
//! intervalos semiabertos `[inferior, superior)`: o valor de fronteira pertence
//! à faixa que começa nele, e a última faixa é aberta para cima.
//!
//! | Grandeza | Faixas | Rótulos |
//! |:---------|:-------|:--------|
//! | Temperatura (°C) | <15 / [15,20) / [20,28) / [28,35) / ≥35 | Cold, Cool, Optimal, Warm, Hot |
//! | Umidade (%) | <40 / [40,60) / [60,80) / ≥80 | Dry, Optimal, Humid, Very Humid |
//! | pH | fora de [0,14] / <5.5 / [5.5,6.5) / [6.5,7.5) / ≥7.5 | Invalid, Very Acidic, Acidic, Neutral, Alkaline |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Índice da faixa: quantos limiares são `<= value`.
///
/// NaN não satisfaz nenhuma comparação e cai na primeira faixa.
#[inline]
fn band_index(value: f64, thresholds: &[f64]) -> usize {
    thresholds.iter().take_while(|&&t| value >= t).count()
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEMPERATURA
// ═══════════════════════════════════════════════════════════════════════════════

/// Faixa de temperatura do ar da horta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    Cold,
    Cool,
    Optimal,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// Limiares inferiores (°C) de Cool, Optimal, Warm e Hot
    pub const THRESHOLDS: [f64; 4] = [15.0, 20.0, 28.0, 35.0];

    const ORDER: [Self; 5] = [Self::Cold, Self::Cool, Self::Optimal, Self::Warm, Self::Hot];

    /// Classifica uma temperatura em °C
    pub fn classify(celsius: f64) -> Self {
        Self::ORDER[band_index(celsius, &Self::THRESHOLDS)]
    }

    /// Rótulo exibido no painel
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::Optimal => "Optimal",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// UMIDADE
// ═══════════════════════════════════════════════════════════════════════════════

/// Faixa de umidade relativa do ar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HumidityBand {
    Dry,
    Optimal,
    Humid,
    #[serde(rename = "Very Humid")]
    VeryHumid,
}

impl HumidityBand {
    /// Limiares inferiores (%) de Optimal, Humid e Very Humid
    pub const THRESHOLDS: [f64; 3] = [40.0, 60.0, 80.0];

    const ORDER: [Self; 4] = [Self::Dry, Self::Optimal, Self::Humid, Self::VeryHumid];

    /// Classifica uma umidade relativa em %
    pub fn classify(percent: f64) -> Self {
        Self::ORDER[band_index(percent, &Self::THRESHOLDS)]
    }

    /// Rótulo exibido no painel
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Optimal => "Optimal",
            Self::Humid => "Humid",
            Self::VeryHumid => "Very Humid",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// pH
// ═══════════════════════════════════════════════════════════════════════════════

/// Faixa de pH do solo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhBand {
    /// Leitura fora do domínio físico [0, 14]
    Invalid,
    #[serde(rename = "Very Acidic")]
    VeryAcidic,
    Acidic,
    Neutral,
    Alkaline,
}

impl PhBand {
    /// Domínio válido de pH (fechado)
    pub const DOMAIN: (f64, f64) = (0.0, 14.0);

    /// Limiares inferiores de Acidic, Neutral e Alkaline
    pub const THRESHOLDS: [f64; 3] = [5.5, 6.5, 7.5];

    const ORDER: [Self; 4] = [Self::VeryAcidic, Self::Acidic, Self::Neutral, Self::Alkaline];

    /// Classifica um pH; fora de [0, 14] (ou NaN) é `Invalid`
    pub fn classify(ph: f64) -> Self {
        let (low, high) = Self::DOMAIN;
        if !(low..=high).contains(&ph) {
            return Self::Invalid;
        }
        Self::ORDER[band_index(ph, &Self::THRESHOLDS)]
    }

    /// Rótulo exibido no painel (`"Invalid"` fora do domínio)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::VeryAcidic => "Very Acidic",
            Self::Acidic => "Acidic",
            Self::Neutral => "Neutral",
            Self::Alkaline => "Alkaline",
        }
    }

    /// `false` para leituras fora de [0, 14] ou NaN
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

macro_rules! impl_display_label {
    ($($band:ty),+) => {
        $(
            impl fmt::Display for $band {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

impl_display_label!(TemperatureBand, HumidityBand, PhBand);

/// Rótulo de temperatura (°C)
pub fn classify_temperature(celsius: f64) -> &'static str {
    TemperatureBand::classify(celsius).label()
}

/// Rótulo de umidade relativa (%)
pub fn classify_humidity(percent: f64) -> &'static str {
    HumidityBand::classify(percent).label()
}

/// Rótulo de pH
pub fn classify_ph(ph: f64) -> &'static str {
    PhBand::classify(ph).label()
}
