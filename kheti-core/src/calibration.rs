//! Calibração do sensor de umidade do solo
//!
//! Converte uma leitura bruta (contagens do ADC) em porcentagem de umidade
//! a partir de dois pontos de calibração nomeados:
//!
//! - `dry_value`: leitura observada com o solo seco (0 %)
//! - `wet_value`: leitura observada com o solo encharcado (100 %)
//!
//! Os dois sentidos são suportados. Sensores capacitivos costumam ser
//! inversos (`dry_value > wet_value`); sensores resistivos são diretos
//! (`dry_value < wet_value`). Os limites nunca são reordenados por posição.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Limite inferior da escala de umidade
pub const MOISTURE_MIN: f64 = 0.0;

/// Limite superior da escala de umidade
pub const MOISTURE_MAX: f64 = 100.0;

/// Converte uma leitura bruta em porcentagem de umidade [0, 100].
///
/// A leitura é primeiro limitada ao intervalo fechado entre os dois limites e
/// depois interpolada linearmente: perto de `wet_value` tende a 100, perto de
/// `dry_value` tende a 0.
///
/// Limites iguais retornam `0.0`. Qualquer NaN (leitura ou limite) e limites
/// infinitos também retornam `0.0`, de modo que o resultado nunca é NaN nem
/// infinito. Limites finitos muito distantes continuam valendo.
///
/// ```
/// use kheti_core::calibration::calibrate;
///
/// // Sensor capacitivo: leitura menor = solo mais úmido
/// assert_eq!(calibrate(1500.0, 3500.0, 1500.0), 100.0);
/// assert_eq!(calibrate(2500.0, 3500.0, 1500.0), 50.0);
/// assert_eq!(calibrate(9999.0, 3500.0, 1500.0), 0.0);
/// ```
pub fn calibrate(raw: f64, dry_value: f64, wet_value: f64) -> f64 {
    if raw.is_nan() || !dry_value.is_finite() || !wet_value.is_finite() || dry_value == wet_value {
        return 0.0;
    }

    let low = dry_value.min(wet_value);
    let high = dry_value.max(wet_value);
    let clamped = raw.clamp(low, high);

    // Diferença que transborda: trabalha com metades
    let scale = if (dry_value - wet_value).is_finite() { 1.0 } else { 0.5 };
    let span = dry_value * scale - wet_value * scale;

    ((dry_value * scale - clamped * scale) / span * MOISTURE_MAX).clamp(MOISTURE_MIN, MOISTURE_MAX)
}

/// Par de limites de calibração de uma instalação física
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureCalibration {
    /// Leitura bruta com solo seco (0 %)
    pub dry_value: f64,
    /// Leitura bruta com solo encharcado (100 %)
    pub wet_value: f64,
}

impl MoistureCalibration {
    /// Cria calibração sem validação (a conversão continua total)
    pub const fn new(dry_value: f64, wet_value: f64) -> Self {
        Self { dry_value, wet_value }
    }

    /// Cria calibração rejeitando limites iguais ou não finitos
    pub fn checked(dry_value: f64, wet_value: f64) -> CoreResult<Self> {
        if !dry_value.is_finite() || !wet_value.is_finite() {
            return Err(CoreError::InvalidCalibration(format!(
                "bounds must be finite (dry={dry_value}, wet={wet_value})"
            )));
        }

        if dry_value == wet_value {
            return Err(CoreError::InvalidCalibration(format!(
                "dry and wet bounds are equal ({dry_value})"
            )));
        }

        Ok(Self::new(dry_value, wet_value))
    }

    /// Converte uma leitura bruta em porcentagem
    #[inline]
    pub fn percentage(&self, raw: f64) -> f64 {
        calibrate(raw, self.dry_value, self.wet_value)
    }

    /// `true` quando leituras menores significam solo mais úmido
    pub fn is_inverse(&self) -> bool {
        self.dry_value > self.wet_value
    }
}

impl Default for MoistureCalibration {
    /// Sensor capacitivo v1.2 em ADC de 12 bits (ESP32, atenuação 11 dB)
    fn default() -> Self {
        Self::new(3500.0, 1500.0)
    }
}
