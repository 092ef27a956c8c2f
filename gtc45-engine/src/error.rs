//! Error types for the classification engine

use crate::types::InputField;
use thiserror::Error;

/// Classification engine error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An ordinal input is not a member of its allowed set
    #[error("Invalid {field}: {value}. Allowed values: {allowed:?}")]
    InvalidInput {
        /// Which input was rejected
        field: InputField,
        /// The rejected value
        value: i32,
        /// The closed set of allowed values for the field
        allowed: &'static [i32],
    },

    /// A computed score is not covered by any band of the scale table.
    /// This is a table defect, not a caller error.
    #[error("Classification gap: no {quantity} band covers score {score}")]
    ClassificationGap {
        /// Which scale table was consulted
        quantity: &'static str,
        /// The uncovered score
        score: i32,
    },

    /// A scale table failed construction-time verification
    #[error("Invalid scale table: {0}")]
    InvalidTable(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
