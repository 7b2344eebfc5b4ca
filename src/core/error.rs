//! Error types for kernel evaluation and the layers around it

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    /// A hyperparameter vector does not have the length its kernel family requires
    #[error(
        "kernel: wrong number of hyperparameters: expected {expected}, got {actual} (input dimension {dim})"
    )]
    BadNumHyper {
        expected: usize,
        actual: usize,
        dim: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for KernelError {
    fn from(err: serde_json::Error) -> Self {
        KernelError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;
