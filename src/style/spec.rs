//! The style specification value type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Rgb;
use crate::mapping::{self, EvaluationError, StyleValue};

/// The semantic kind of a computed style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Color,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Color => "color",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The strategy used to compute a style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mapping {
    /// A flat value, independent of element data.
    Value,
    /// Linear interpolation of a numeric attribute.
    Linear,
    /// An attribute's value used verbatim.
    Passthrough,
}

impl Mapping {
    pub fn as_str(self) -> &'static str {
        match self {
            Mapping::Value => "value",
            Mapping::Linear => "linear",
            Mapping::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a linear mapping from an attribute's domain onto a range.
///
/// The domain is ordered (`domain_low <= domain_high`); the range may run in
/// either direction. Instances only come out of the factory functions on
/// [`StyleSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearMap<R> {
    #[serde(rename = "attributeName")]
    pub(crate) attribute: String,
    pub(crate) domain_low: f64,
    pub(crate) domain_high: f64,
    pub(crate) range_low: R,
    pub(crate) range_high: R,
}

impl<R: Copy> LinearMap<R> {
    /// The data attribute read at evaluation time.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The `(low, high)` input domain.
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_low, self.domain_high)
    }

    /// The `(low, high)` output range.
    pub fn range(&self) -> (R, R) {
        (self.range_low, self.range_high)
    }
}

/// The computation behind a [`StyleSpec`], one variant per valid
/// combination of [`Mapping`] and [`ValueKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Number(f64),
    Color(Rgb),
    LinearNumber(LinearMap<f64>),
    LinearColor(LinearMap<Rgb>),
    Passthrough { kind: ValueKind, attribute: String },
}

impl Rule {
    pub fn kind(&self) -> ValueKind {
        match self {
            Rule::Number(_) | Rule::LinearNumber(_) => ValueKind::Number,
            Rule::Color(_) | Rule::LinearColor(_) => ValueKind::Color,
            Rule::Passthrough { kind, .. } => *kind,
        }
    }

    pub fn mapping(&self) -> Mapping {
        match self {
            Rule::Number(_) | Rule::Color(_) => Mapping::Value,
            Rule::LinearNumber(_) | Rule::LinearColor(_) => Mapping::Linear,
            Rule::Passthrough { .. } => Mapping::Passthrough,
        }
    }
}

/// An immutable description of how to compute one style property.
///
/// Built by the factory functions ([`StyleSpec::number`], [`StyleSpec::color`],
/// [`StyleSpec::linear_number`], [`StyleSpec::linear_color`],
/// [`StyleSpec::passthrough`]), which are the only place its invariants are
/// checked. The spec also carries its rendering in the graph library's style
/// syntax, available through [`StyleSpec::display_string`] and `Display`.
///
/// Serializes as `{"type", "mapping", "value", "display"}`; deserializing
/// goes back through the factory.
///
/// # Example
///
/// ```rust
/// use netstyle::StyleSpec;
/// use serde_json::json;
///
/// let spec = StyleSpec::linear_number("weight", 0.0, 10.0, 5.0, 25.0).unwrap();
/// assert_eq!(spec.display_string(), "mapData(weight, 0, 10, 5, 25)");
///
/// let width = spec.evaluate(|_: &str| json!(5)).unwrap();
/// assert_eq!(width.as_f64(), Some(15.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "super::record::SpecRecord", try_from = "super::record::SpecRecord")]
pub struct StyleSpec {
    pub(crate) rule: Rule,
    pub(crate) display: String,
}

impl StyleSpec {
    pub fn kind(&self) -> ValueKind {
        self.rule.kind()
    }

    pub fn mapping(&self) -> Mapping {
        self.rule.mapping()
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The spec rendered in the graph library's declarative style syntax.
    pub fn display_string(&self) -> &str {
        &self.display
    }

    /// The data attribute this spec reads, if any.
    pub fn attribute(&self) -> Option<&str> {
        match &self.rule {
            Rule::Number(_) | Rule::Color(_) => None,
            Rule::LinearNumber(map) => Some(map.attribute()),
            Rule::LinearColor(map) => Some(map.attribute()),
            Rule::Passthrough { attribute, .. } => Some(attribute),
        }
    }

    /// Computes the style value for one element.
    ///
    /// See [`mapping::evaluate`].
    pub fn evaluate<F>(&self, read_attribute: F) -> Result<StyleValue, EvaluationError>
    where
        F: Fn(&str) -> Value,
    {
        mapping::evaluate(self, read_attribute)
    }
}

impl fmt::Display for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
