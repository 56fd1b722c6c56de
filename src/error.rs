//! Error types for the workout tracker

use thiserror::Error;

/// Errors that can occur while reading packages or computing summaries
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Invalid training type: {code}. Available types: {}", available.join(", "))]
    UnknownWorkoutType {
        code: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid data: no sensor fields supplied")]
    EmptyData,

    #[error("Data items can not be null (field {index})")]
    NullField { index: usize },

    #[error("Invalid data: field {index} has value {value}")]
    InvalidField { index: usize, value: f64 },

    #[error("Invalid data for {code}: expected {expected} fields, got {actual}")]
    FieldCount {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Metric out of range: {metric} is {value}")]
    NonFiniteMetric { metric: &'static str, value: f64 },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
