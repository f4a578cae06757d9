use thiserror::Error;

pub type WheelResult<T> = Result<T, WheelError>;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("segment label `{label}` already exists")]
    DuplicateLabel { label: String },

    #[error("unknown palette `{name}`")]
    UnknownPalette { name: String },

    #[error("operation not allowed while a spin is in flight")]
    SpinInFlight,

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
