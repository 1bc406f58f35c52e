//! Evaluation errors.

use serde_json::Value;

/// Error returned when a spec cannot be evaluated against an element.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A linear mapping read an attribute that is not a number
    NonNumericAttribute { attribute: String, found: Value },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationError::NonNumericAttribute { attribute, found } => {
                write!(
                    f,
                    "attribute '{}' must be numeric for a linear mapping, found {}",
                    attribute, found
                )
            }
        }
    }
}

impl std::error::Error for EvaluationError {}
