//! Supported style properties and their defaults.
//!
//! Nodes and edges accept different style properties. Each property also has
//! the [`ValueKind`] its specs must produce:
//!
//! | Target | Property | Kind |
//! |--------|----------|------|
//! | node | `background-color` | color |
//! | node | `width` | number |
//! | node | `height` | number |
//! | edge | `line-color` | color |
//!
//! [`DEFAULT_NODE_STYLE`] and [`DEFAULT_EDGE_STYLE`] hold the spec used for
//! each property when nothing else is configured.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::style::{StyleSpec, ValueKind};

/// The kind of graph element a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Node,
    Edge,
}

impl Target {
    /// Both targets, nodes first.
    pub const ALL: [Target; 2] = [Target::Node, Target::Edge];

    /// The selector naming this target in the graph library's style syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Node => "node",
            Target::Edge => "edge",
        }
    }

    /// The `(property, kind)` table for this target.
    pub fn properties(self) -> &'static [(&'static str, ValueKind)] {
        match self {
            Target::Node => NODE_PROPERTIES,
            Target::Edge => EDGE_PROPERTIES,
        }
    }

    /// The default style table for this target.
    pub fn default_style(self) -> &'static BTreeMap<&'static str, StyleSpec> {
        match self {
            Target::Node => &DEFAULT_NODE_STYLE,
            Target::Edge => &DEFAULT_EDGE_STYLE,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Target`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTargetError(pub String);

impl fmt::Display for UnknownTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style target '{}', expected 'node' or 'edge'", self.0)
    }
}

impl std::error::Error for UnknownTargetError {}

impl FromStr for Target {
    type Err = UnknownTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Target::Node),
            "edge" => Ok(Target::Edge),
            other => Err(UnknownTargetError(other.to_string())),
        }
    }
}

/// Style properties applicable to nodes.
pub const NODE_PROPERTIES: &[(&str, ValueKind)] = &[
    ("background-color", ValueKind::Color),
    ("width", ValueKind::Number),
    ("height", ValueKind::Number),
];

/// Style properties applicable to edges.
pub const EDGE_PROPERTIES: &[(&str, ValueKind)] = &[("line-color", ValueKind::Color)];

/// Fill and line color used when no style is configured.
pub const DEFAULT_GRAY: Rgb = Rgb::new(0x88, 0x88, 0x88);

/// Width and height of a node when no style is configured.
pub const DEFAULT_NODE_SIZE: f64 = 30.0;

/// Default spec for every node property.
pub static DEFAULT_NODE_STYLE: Lazy<BTreeMap<&'static str, StyleSpec>> = Lazy::new(|| {
    BTreeMap::from([
        ("background-color", StyleSpec::rgb(DEFAULT_GRAY)),
        ("width", StyleSpec::number(DEFAULT_NODE_SIZE)),
        ("height", StyleSpec::number(DEFAULT_NODE_SIZE)),
    ])
});

/// Default spec for every edge property.
pub static DEFAULT_EDGE_STYLE: Lazy<BTreeMap<&'static str, StyleSpec>> =
    Lazy::new(|| BTreeMap::from([("line-color", StyleSpec::rgb(DEFAULT_GRAY))]));

fn lookup(table: &[(&str, ValueKind)], name: &str) -> Option<ValueKind> {
    table
        .iter()
        .find(|(property, _)| *property == name)
        .map(|(_, kind)| *kind)
}

/// Returns `true` if `name` is a node style property.
pub fn is_node_property(name: &str) -> bool {
    lookup(NODE_PROPERTIES, name).is_some()
}

/// Returns `true` if `name` is an edge style property.
pub fn is_edge_property(name: &str) -> bool {
    lookup(EDGE_PROPERTIES, name).is_some()
}

/// Returns `true` if `name` is supported for `target`, or for either target
/// when `target` is `None`.
pub fn is_supported_property(name: &str, target: Option<Target>) -> bool {
    match target {
        None => is_node_property(name) || is_edge_property(name),
        Some(Target::Node) => is_node_property(name),
        Some(Target::Edge) => is_edge_property(name),
    }
}

/// Returns the value kind `name` expects on `target`, or `None` if the
/// property is not supported there.
pub fn property_kind(name: &str, target: Target) -> Option<ValueKind> {
    lookup(target.properties(), name)
}
