//! Stylesheet errors.

use std::path::PathBuf;

use crate::registry::Target;
use crate::style::{StyleSpecError, ValueKind};

/// Error returned when building or loading a [`Stylesheet`](super::Stylesheet).
#[derive(Debug, Clone, PartialEq)]
pub enum StylesheetError {
    /// The property is not supported for the target.
    UnsupportedProperty { target: Target, property: String },

    /// The spec computes a different kind of value than the property takes.
    KindMismatch {
        target: Target,
        property: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A property's definition was rejected by the spec factory.
    Spec {
        target: Target,
        property: String,
        source: StyleSpecError,
    },

    /// The stylesheet document is not valid YAML or JSON, or has the wrong shape.
    Parse {
        /// Error message
        message: String,
    },

    /// Failed to read a stylesheet file from disk.
    ReadError {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// The file extension does not name a supported format.
    UnknownFormat { path: PathBuf },
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::UnsupportedProperty { target, property } => {
                write!(f, "'{}' is not a supported {} style property", property, target)
            }
            StylesheetError::KindMismatch {
                target,
                property,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{} property '{}' takes a {} value, but the style computes a {}",
                    target, property, expected, found
                )
            }
            StylesheetError::Spec {
                target,
                property,
                source,
            } => {
                write!(f, "invalid style for {} property '{}': {}", target, property, source)
            }
            StylesheetError::Parse { message } => {
                write!(f, "failed to parse stylesheet: {}", message)
            }
            StylesheetError::ReadError { path, message } => {
                write!(f, "failed to read stylesheet '{}': {}", path.display(), message)
            }
            StylesheetError::UnknownFormat { path } => {
                write!(
                    f,
                    "cannot tell the format of '{}': expected a .yaml, .yml or .json file",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StylesheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StylesheetError::Spec { source, .. } => Some(source),
            _ => None,
        }
    }
}
