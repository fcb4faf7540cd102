//! Tipos de erro para qkill-engine

use thiserror::Error;

/// Resultado customizado para operações do simulador
pub type QsimResult<T> = Result<T, QsimError>;

/// Erros que podem ocorrer na construção ou execução de circuitos
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QsimError {
    #[error("Invalid operand: {kind} index {index} out of range (limit {limit})")]
    InvalidOperand {
        kind: &'static str,
        index: usize,
        limit: usize,
    },

    #[error("Duplicate measurement: classical bit {0} already written")]
    DuplicateMeasurement(usize),

    #[error("Invalid shot count: {0}")]
    InvalidShotCount(u64),

    #[error("Gate after measurement: '{0}' appended past a terminal measure")]
    GateAfterMeasurement(&'static str),

    #[error("Invalid noise rate: {0} (must be within [0, 1])")]
    InvalidNoiseRate(f64),
}
