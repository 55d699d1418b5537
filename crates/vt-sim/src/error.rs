use thiserror::Error;
use vt_core::CoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("speed multiplier must be a finite value >= 0, got {0}")]
    InvalidSpeed(f64),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
