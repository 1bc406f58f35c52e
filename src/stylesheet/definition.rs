//! Stylesheet document format.
//!
//! A stylesheet is a YAML or JSON document with one section per target.
//! Each property takes a shorthand definition:
//!
//! ```yaml
//! defaults: true              # start from the built-in default styles
//! node:
//!   background-color: "#3366cc"     # flat color (text or {r, g, b})
//!   width: 40                       # flat number
//!   height:
//!     linear:                       # linear mapping; numbers or colors
//!       data: weight                # by the property's kind
//!       domain: [0, 10]
//!       range: [20, 60]
//! edge:
//!   line-color:
//!     data: color                   # passthrough
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::ColorInput;
use crate::style::{Mapping, StyleSpec, StyleSpecError, ValueKind};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StylesheetDef {
    #[serde(default)]
    pub(crate) defaults: bool,
    #[serde(default)]
    pub(crate) node: BTreeMap<String, PropertyDef>,
    #[serde(default)]
    pub(crate) edge: BTreeMap<String, PropertyDef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PropertyDef {
    Number(f64),
    Color(ColorInput),
    Passthrough(PassthroughDef),
    Linear(LinearEntry),
}

// Untagged variants only stay unambiguous while each shape rejects the
// fields of the others.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PassthroughDef {
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LinearEntry {
    linear: LinearDef,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LinearDef {
    data: String,
    domain: [f64; 2],
    range: [RangeEnd; 2],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RangeEnd {
    Number(f64),
    Color(ColorInput),
}

impl PropertyDef {
    /// Builds the spec through the factory. `kind` is the property's kind,
    /// used where the definition itself does not decide it.
    pub(crate) fn into_spec(self, kind: ValueKind) -> Result<StyleSpec, StyleSpecError> {
        match self {
            PropertyDef::Number(value) => Ok(StyleSpec::number(value)),
            PropertyDef::Color(input) => StyleSpec::color(input),
            PropertyDef::Passthrough(PassthroughDef { data }) => {
                Ok(StyleSpec::passthrough(kind, data))
            }
            PropertyDef::Linear(LinearEntry { linear }) => linear.into_spec(kind),
        }
    }
}

impl LinearDef {
    fn into_spec(self, kind: ValueKind) -> Result<StyleSpec, StyleSpecError> {
        let [domain_low, domain_high] = self.domain;
        match self.range {
            [RangeEnd::Number(low), RangeEnd::Number(high)] => {
                StyleSpec::linear_number(self.data, domain_low, domain_high, low, high)
            }
            [RangeEnd::Color(low), RangeEnd::Color(high)] => {
                StyleSpec::linear_color(self.data, domain_low, domain_high, low, high)
            }
            _ => Err(StyleSpecError::UnsupportedMapping {
                kind,
                mapping: Mapping::Linear,
                detail: "range mixes a number and a color".to_string(),
            }),
        }
    }
}
