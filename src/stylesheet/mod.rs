//! Per-target collections of style specs.
//!
//! A [`Stylesheet`] holds at most one [`StyleSpec`] per supported property of
//! each [`Target`]. Setting a property validates it against the
//! [registry](crate::registry) and supersedes whatever spec was there.
//!
//! Stylesheets can be built in code, or loaded from YAML/JSON documents (see
//! the format in [`definition`]). Once built they:
//!
//! - compute every configured property for an element ([`Stylesheet::compute`])
//! - emit the graph library's declarative style document
//!   ([`Stylesheet::to_declarations`])

pub mod definition;
mod error;

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{json, Map, Value};
use tracing::{debug, trace};

use crate::mapping::{AttributeSource, EvaluationError, StyleValue};
use crate::registry::{property_kind, Target};
use crate::style::StyleSpec;

use definition::StylesheetDef;
pub use error::StylesheetError;

/// Computed style values for one element, keyed by property name.
pub type ComputedStyle = BTreeMap<String, StyleValue>;

/// Style specs for nodes and edges.
///
/// # Example
///
/// ```rust
/// use netstyle::{StyleSpec, Stylesheet, Target};
/// use serde_json::json;
///
/// let mut sheet = Stylesheet::with_defaults();
/// sheet
///     .set(Target::Node, "width", StyleSpec::linear_number("weight", 0.0, 10.0, 5.0, 25.0).unwrap())
///     .unwrap();
///
/// let style = sheet.compute(Target::Node, &json!({"weight": 5})).unwrap();
/// assert_eq!(style["width"].as_f64(), Some(15.0));
/// assert_eq!(style["height"].as_f64(), Some(30.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    node: BTreeMap<String, StyleSpec>,
    edge: BTreeMap<String, StyleSpec>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stylesheet holding the default style of every property.
    pub fn with_defaults() -> Self {
        let mut sheet = Self::new();
        for target in Target::ALL {
            let specs = sheet.specs_mut(target);
            for (property, spec) in target.default_style().iter() {
                specs.insert(property.to_string(), spec.clone());
            }
        }
        sheet
    }

    fn specs(&self, target: Target) -> &BTreeMap<String, StyleSpec> {
        match target {
            Target::Node => &self.node,
            Target::Edge => &self.edge,
        }
    }

    fn specs_mut(&mut self, target: Target) -> &mut BTreeMap<String, StyleSpec> {
        match target {
            Target::Node => &mut self.node,
            Target::Edge => &mut self.edge,
        }
    }

    /// Sets the spec for `property`, returning the spec it supersedes.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::UnsupportedProperty`] if the property does
    /// not apply to `target`, and [`StylesheetError::KindMismatch`] if the
    /// spec computes the wrong kind of value for it.
    pub fn set(
        &mut self,
        target: Target,
        property: &str,
        spec: StyleSpec,
    ) -> Result<Option<StyleSpec>, StylesheetError> {
        let expected = property_kind(property, target).ok_or_else(|| {
            StylesheetError::UnsupportedProperty {
                target,
                property: property.to_string(),
            }
        })?;
        if spec.kind() != expected {
            return Err(StylesheetError::KindMismatch {
                target,
                property: property.to_string(),
                expected,
                found: spec.kind(),
            });
        }

        let previous = self.specs_mut(target).insert(property.to_string(), spec);
        if previous.is_some() {
            trace!(selector = target.as_str(), property, "superseded style spec");
        }
        Ok(previous)
    }

    /// Returns the spec configured for `property`.
    pub fn get(&self, target: Target, property: &str) -> Option<&StyleSpec> {
        self.specs(target).get(property)
    }

    /// Removes the spec configured for `property`.
    pub fn remove(&mut self, target: Target, property: &str) -> Option<StyleSpec> {
        self.specs_mut(target).remove(property)
    }

    /// Iterates over the specs of `target` in property name order.
    pub fn iter(&self, target: Target) -> impl Iterator<Item = (&str, &StyleSpec)> {
        self.specs(target)
            .iter()
            .map(|(property, spec)| (property.as_str(), spec))
    }

    /// Total number of configured specs across both targets.
    pub fn len(&self) -> usize {
        self.node.len() + self.edge.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty() && self.edge.is_empty()
    }

    /// Computes every configured property of `target` for one element.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvaluationError`] raised by a spec.
    pub fn compute<S>(&self, target: Target, element: &S) -> Result<ComputedStyle, EvaluationError>
    where
        S: AttributeSource + ?Sized,
    {
        self.iter(target)
            .map(|(property, spec)| {
                let value = spec.evaluate(|name| element.attribute(name))?;
                Ok::<_, EvaluationError>((property.to_string(), value))
            })
            .collect()
    }

    /// Renders the stylesheet as the graph library's style document.
    ///
    /// Produces one `{"selector", "style"}` entry per target, with each
    /// property set to its spec's display string:
    ///
    /// ```json
    /// [
    ///   {"selector": "node", "style": {"width": "mapData(weight, 0, 10, 5, 25)"}},
    ///   {"selector": "edge", "style": {"line-color": "data(color)"}}
    /// ]
    /// ```
    pub fn to_declarations(&self) -> Value {
        let blocks: Vec<Value> = Target::ALL
            .iter()
            .map(|target| {
                let style: Map<String, Value> = self
                    .iter(*target)
                    .map(|(property, spec)| {
                        (property.to_string(), Value::String(spec.display_string().to_string()))
                    })
                    .collect();
                json!({ "selector": target.as_str(), "style": style })
            })
            .collect();
        Value::Array(blocks)
    }

    /// Parses a YAML stylesheet document.
    pub fn from_yaml_str(source: &str) -> Result<Self, StylesheetError> {
        let def: StylesheetDef =
            serde_yaml::from_str(source).map_err(|e| StylesheetError::Parse {
                message: e.to_string(),
            })?;
        Self::from_definition(def)
    }

    /// Parses a JSON stylesheet document.
    pub fn from_json_str(source: &str) -> Result<Self, StylesheetError> {
        let def: StylesheetDef =
            serde_json::from_str(source).map_err(|e| StylesheetError::Parse {
                message: e.to_string(),
            })?;
        Self::from_definition(def)
    }

    /// Reads a stylesheet file, choosing the format by extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let parse: fn(&str) -> Result<Self, StylesheetError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(StylesheetError::UnknownFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!(path = %path.display(), "reading stylesheet");
        let source = std::fs::read_to_string(path).map_err(|e| StylesheetError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse(&source)
    }

    fn from_definition(def: StylesheetDef) -> Result<Self, StylesheetError> {
        let mut sheet = if def.defaults {
            Self::with_defaults()
        } else {
            Self::new()
        };

        for (target, properties) in [(Target::Node, def.node), (Target::Edge, def.edge)] {
            for (property, definition) in properties {
                let kind = property_kind(&property, target).ok_or_else(|| {
                    StylesheetError::UnsupportedProperty {
                        target,
                        property: property.clone(),
                    }
                })?;
                let spec = definition
                    .into_spec(kind)
                    .map_err(|source| StylesheetError::Spec {
                        target,
                        property: property.clone(),
                        source,
                    })?;
                sheet.set(target, &property, spec)?;
            }
        }

        debug!(
            nodes = sheet.node.len(),
            edges = sheet.edge.len(),
            "loaded stylesheet"
        );
        Ok(sheet)
    }
}
