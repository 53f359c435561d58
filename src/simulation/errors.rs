use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("final time must not be negative, got {0} s")]
    NegativeDuration(f64),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("sample count must be at least 1")]
    NoSamples,
}
