//! # Prelude - Re-exportações Convenientes
//!
//! ```
//! use kheti_core::prelude::*;
//! ```

// Calibração
pub use crate::calibration::{calibrate, MoistureCalibration};

// Classificadores
pub use crate::bands::{
    classify_humidity,
    classify_ph,
    classify_temperature,
    HumidityBand,
    PhBand,
    TemperatureBand,
};

// Clima
pub use crate::weather::{describe_weather, WeatherCondition};

// Sensores e interpretação
pub use crate::sensor::{SensorKind, SensorSnapshot};
pub use crate::interpret::{interpret, Banded, Interpretation};
pub use crate::stats::{describe, DescriptiveStats};

// Erros
pub use crate::error::{CoreError, CoreResult};
