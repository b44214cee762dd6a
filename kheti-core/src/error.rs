//! Erros do motor de interpretação
//!
//! As funções de interpretação são totais e nunca falham. Os erros abaixo
//! só aparecem em validações feitas no momento da configuração.

use thiserror::Error;

/// Resultado de operações de configuração do núcleo
pub type CoreResult<T> = Result<T, CoreError>;

/// Erros de configuração do motor de interpretação
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Limites de calibração inutilizáveis (iguais ou não finitos)
    #[error("Calibração inválida: {0}")]
    InvalidCalibration(String),

    /// Nome de sensor desconhecido
    #[error("Sensor desconhecido: '{0}'")]
    UnknownSensor(String),
}
