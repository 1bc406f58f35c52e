//! Style specification errors.

use super::spec::{Mapping, ValueKind};

/// Error returned when a style specification cannot be constructed.
///
/// All variants are raised at construction time; a [`StyleSpec`](super::StyleSpec)
/// that exists is always well formed.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSpecError {
    /// A linear mapping was given a domain whose low end exceeds its high end
    InvalidRange {
        attribute: String,
        low: f64,
        high: f64,
    },
    /// A linear mapping endpoint is NaN or infinite
    NonFinite {
        attribute: String,
        value: f64,
    },
    /// A color value could not be parsed
    InvalidColor { input: String },
    /// A serialized spec's payload does not fit its type and mapping
    UnsupportedMapping {
        kind: ValueKind,
        mapping: Mapping,
        detail: String,
    },
}

impl std::fmt::Display for StyleSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleSpecError::InvalidRange {
                attribute,
                low,
                high,
            } => {
                write!(
                    f,
                    "misordered range for '{}': domain low {} is greater than domain high {}",
                    attribute, low, high
                )
            }
            StyleSpecError::NonFinite { attribute, value } => {
                write!(
                    f,
                    "linear mapping for '{}' has a non-finite endpoint: {}",
                    attribute, value
                )
            }
            StyleSpecError::InvalidColor { input } => {
                write!(f, "'{}' is not a valid color", input)
            }
            StyleSpecError::UnsupportedMapping {
                kind,
                mapping,
                detail,
            } => {
                write!(f, "unsupported {} mapping for {} style: {}", mapping, kind, detail)
            }
        }
    }
}

impl std::error::Error for StyleSpecError {}
