//! Evaluation of style specifications against element data.
//!
//! This module provides:
//!
//! - [`evaluate`]: Computes one spec's value for one element
//! - [`StyleValue`]: The computed value handed back to the graph library
//! - [`AttributeSource`]: Read access to an element's data attributes
//! - [`EvaluationError`]: Errors from evaluation
//!
//! Evaluation is a pure function of the spec and the attribute reader. It
//! never mutates either, and never applies styles itself.

mod engine;
mod error;
mod source;
mod value;

pub use engine::{evaluate, interpolate};
pub use error::EvaluationError;
pub use source::AttributeSource;
pub use value::StyleValue;
