//! Interpretação de um conjunto de leituras
//!
//! Junta calibração e classificadores: recebe um [`SensorSnapshot`] e devolve
//! os valores derivados com seus rótulos. Leituras ausentes continuam
//! ausentes; nada aqui lê configuração global.

use serde::{Deserialize, Serialize};

use crate::bands::{HumidityBand, PhBand, TemperatureBand};
use crate::calibration::MoistureCalibration;
use crate::sensor::SensorSnapshot;

/// Valor acompanhado da faixa em que caiu
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Banded<B> {
    pub value: f64,
    pub band: B,
}

/// Resultado da interpretação de um snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub temperature: Option<Banded<TemperatureBand>>,
    pub humidity: Option<Banded<HumidityBand>>,
    /// Umidade do solo em % (após calibração, se houver)
    pub soil_moisture: Option<f64>,
    pub ph: Option<Banded<PhBand>>,
}

/// Interpreta todas as leituras presentes.
///
/// Com `calibration = None` a leitura de umidade do solo já é tratada como
/// porcentagem e passa inalterada.
pub fn interpret(
    snapshot: &SensorSnapshot,
    calibration: Option<&MoistureCalibration>,
) -> Interpretation {
    Interpretation {
        temperature: snapshot.temperature.map(|value| Banded {
            value,
            band: TemperatureBand::classify(value),
        }),
        humidity: snapshot.humidity.map(|value| Banded {
            value,
            band: HumidityBand::classify(value),
        }),
        soil_moisture: snapshot
            .soil_moisture
            .map(|raw| calibration.map_or(raw, |cal| cal.percentage(raw))),
        ph: snapshot.ph.map(|value| Banded {
            value,
            band: PhBand::classify(value),
        }),
    }
}
