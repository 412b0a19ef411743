use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("non-finite value at {frequency} Hz: {value}")]
    NonFiniteValue { frequency: String, value: f64 },

    #[error("invalid number '{input}'")]
    InvalidNumber { input: String },
}
