//! # Netstyle - Data-Driven Graph Styling
//!
//! Netstyle computes the visual style of graph nodes and edges from their
//! data. A [`StyleSpec`] declares how one style property is derived:
//!
//! - **Flat values**: `StyleSpec::number(30.0)`, `StyleSpec::color("#888")`
//! - **Linear mappings**: interpolate a numeric attribute onto a number or
//!   color range, e.g. `weight` in `[0, 10]` onto a width in `[5, 25]`
//! - **Passthrough**: use an attribute's value as the style value, verbatim
//!
//! Specs are validated once, when built, and evaluated any number of times
//! against element data with [`evaluate`]. Each spec also renders itself in
//! the graph library's declarative style syntax (`mapData(...)`, `data(...)`,
//! `rgb(...)`), so a whole [`Stylesheet`] can be handed to the library as-is.
//!
//! ## Quick Start
//!
//! ```rust
//! use netstyle::{evaluate, StyleSpec};
//! use serde_json::{json, Value};
//!
//! let width = StyleSpec::linear_number("weight", 0.0, 10.0, 5.0, 25.0).unwrap();
//! let value = evaluate(&width, |name| {
//!     if name == "weight" { json!(5) } else { Value::Null }
//! })
//! .unwrap();
//! assert_eq!(value.as_f64(), Some(15.0));
//! ```
//!
//! ## Stylesheets
//!
//! A [`Stylesheet`] groups specs per [`Target`] and checks each property
//! against the [`registry`] of supported properties:
//!
//! ```rust
//! use netstyle::{Stylesheet, Target};
//! use serde_json::json;
//!
//! let sheet = Stylesheet::from_yaml_str(r#"
//! defaults: true
//! edge:
//!   line-color:
//!     linear: { data: strength, domain: [0, 1], range: [white, black] }
//! "#).unwrap();
//!
//! let style = sheet.compute(Target::Edge, &json!({"strength": 1})).unwrap();
//! assert_eq!(style["line-color"].as_str(), Some("rgb(0, 0, 0)"));
//! ```
//!
//! ## Errors
//!
//! Construction fails early: a misordered domain is a
//! [`StyleSpecError::InvalidRange`], an unparseable color a
//! [`StyleSpecError::InvalidColor`]. Evaluation only fails when a linear
//! mapping reads a non-numeric attribute.

pub mod color;
pub mod mapping;
pub mod registry;
pub mod style;
pub mod stylesheet;

pub use color::{ColorInput, Rgb};
pub use mapping::{evaluate, interpolate, AttributeSource, EvaluationError, StyleValue};
pub use registry::{
    is_edge_property, is_node_property, is_supported_property, property_kind, Target,
    DEFAULT_EDGE_STYLE, DEFAULT_NODE_STYLE,
};
pub use style::{LinearMap, Mapping, Rule, StyleSpec, StyleSpecError, ValueKind};
pub use stylesheet::{ComputedStyle, Stylesheet, StylesheetError};
