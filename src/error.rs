//! Error taxonomy for encoding, scoring and model loading.
//!
//! Every variant is recoverable by correcting the input or the configuration;
//! none of them is fatal to a long-running process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    /// Numeric field outside its declared domain
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRangeInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Categorical value not observed in the reference dataset
    #[error("unknown {field} category {value:?}")]
    UnknownCategory { field: &'static str, value: String },

    #[error("cannot derive BMI from height {height_cm} cm; height must be > 0")]
    InvalidHeightForBmi { height_cm: f64 },

    #[error("BMI missing: supply either a BMI value or weight and height")]
    MissingBmi,

    #[error("BMI supplied twice: use either a BMI value or weight and height, not both")]
    AmbiguousBmi,

    #[error("reference dataset has no usable values for {field}")]
    EmptyReference { field: &'static str },

    #[error("reference dataset is missing column {column:?}")]
    MissingColumn { column: &'static str },

    #[error("reference dataset: {0}")]
    Dataset(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model: {0}")]
    Model(String),

    #[error("model was trained against code tables {expected}, reference dataset gives {actual}")]
    ModelMismatch { expected: String, actual: String },
}

impl From<ort::OrtError> for RiskError {
    fn from(e: ort::OrtError) -> Self {
        RiskError::Model(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
