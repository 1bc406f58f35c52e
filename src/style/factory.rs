//! Constructors for validated style specifications.
//!
//! Every [`StyleSpec`] is built here. Domain order and color syntax are
//! checked once, at construction; evaluation never re-validates.

use tracing::warn;

use super::error::StyleSpecError;
use super::spec::{LinearMap, Rule, StyleSpec, ValueKind};
use crate::color::{ColorInput, Rgb};

impl StyleSpec {
    /// A flat numeric style.
    ///
    /// Any `f64` is accepted. NaN and infinities have no form in the graph
    /// library's style syntax or in JSON: they display as Rust renders them
    /// and serialize as `null`, which does not deserialize back.
    pub fn number(value: f64) -> Self {
        Self {
            rule: Rule::Number(value),
            display: value.to_string(),
        }
    }

    /// A flat color style from an already normalized triple.
    pub fn rgb(rgb: Rgb) -> Self {
        Self {
            rule: Rule::Color(rgb),
            display: rgb.to_string(),
        }
    }

    /// A flat color style.
    ///
    /// Accepts CSS color text or an RGB triple.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSpecError::InvalidColor`] if the input does not parse.
    pub fn color(input: impl Into<ColorInput>) -> Result<Self, StyleSpecError> {
        let rgb = input.into().resolve()?;
        Ok(Self::rgb(rgb))
    }

    /// A numeric style linearly interpolated from `attribute`.
    ///
    /// Maps `[domain_low, domain_high]` onto `[range_low, range_high]`. The
    /// range may be decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSpecError::InvalidRange`] unless `domain_low <= domain_high`,
    /// and [`StyleSpecError::NonFinite`] if any endpoint is NaN or infinite.
    pub fn linear_number(
        attribute: impl Into<String>,
        domain_low: f64,
        domain_high: f64,
        range_low: f64,
        range_high: f64,
    ) -> Result<Self, StyleSpecError> {
        let attribute = attribute.into();
        check_domain(&attribute, domain_low, domain_high)?;
        check_finite(&attribute, &[range_low, range_high])?;

        let display = format!(
            "mapData({}, {}, {}, {}, {})",
            attribute, domain_low, domain_high, range_low, range_high
        );
        Ok(Self {
            rule: Rule::LinearNumber(LinearMap {
                attribute,
                domain_low,
                domain_high,
                range_low,
                range_high,
            }),
            display,
        })
    }

    /// A color style linearly interpolated, channel by channel, from `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSpecError::InvalidRange`] unless `domain_low <= domain_high`,
    /// [`StyleSpecError::NonFinite`] if a domain bound is infinite, and
    /// [`StyleSpecError::InvalidColor`] if either color does not parse.
    pub fn linear_color(
        attribute: impl Into<String>,
        domain_low: f64,
        domain_high: f64,
        color_low: impl Into<ColorInput>,
        color_high: impl Into<ColorInput>,
    ) -> Result<Self, StyleSpecError> {
        let attribute = attribute.into();
        check_domain(&attribute, domain_low, domain_high)?;
        let range_low = color_low.into().resolve()?;
        let range_high = color_high.into().resolve()?;

        let display = format!(
            "mapData({}, {}, {}, {}, {})",
            attribute, domain_low, domain_high, range_low, range_high
        );
        Ok(Self {
            rule: Rule::LinearColor(LinearMap {
                attribute,
                domain_low,
                domain_high,
                range_low,
                range_high,
            }),
            display,
        })
    }

    /// A style that uses `attribute`'s value verbatim.
    ///
    /// `kind` records what the attribute is expected to hold; the value is
    /// not converted or checked at evaluation time.
    pub fn passthrough(kind: ValueKind, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self {
            display: format!("data({})", attribute),
            rule: Rule::Passthrough { kind, attribute },
        }
    }
}

fn check_domain(attribute: &str, low: f64, high: f64) -> Result<(), StyleSpecError> {
    // Written so that NaN bounds fail as well.
    if !(low <= high) {
        return Err(StyleSpecError::InvalidRange {
            attribute: attribute.to_string(),
            low,
            high,
        });
    }
    check_finite(attribute, &[low, high])?;
    if low == high {
        warn!(
            attribute,
            domain = low,
            "linear mapping has an empty domain; evaluation will not produce finite values"
        );
    }
    Ok(())
}

fn check_finite(attribute: &str, values: &[f64]) -> Result<(), StyleSpecError> {
    match values.iter().find(|value| !value.is_finite()) {
        Some(&value) => Err(StyleSpecError::NonFinite {
            attribute: attribute.to_string(),
            value,
        }),
        None => Ok(()),
    }
}
