//! Declarative style specifications.
//!
//! This module provides the value type describing how one style property is
//! computed from element data:
//!
//! - [`StyleSpec`]: An immutable, validated specification
//! - [`Rule`]: The computation, one variant per (mapping, kind) shape
//! - [`ValueKind`] / [`Mapping`]: The semantic kind and strategy tags
//! - [`StyleSpecError`]: Errors from spec construction
//!
//! Specs are only built through the factory functions on [`StyleSpec`], so a
//! spec that exists always has a payload matching its kind and mapping.

mod error;
mod factory;
mod record;
mod spec;

pub use error::StyleSpecError;
pub use spec::{LinearMap, Mapping, Rule, StyleSpec, ValueKind};
