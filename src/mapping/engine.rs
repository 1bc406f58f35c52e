//! The style mapping evaluator.

use serde_json::Value;

use super::error::EvaluationError;
use super::value::StyleValue;
use crate::style::{Rule, StyleSpec};

/// Computes the value of `spec` for one element.
///
/// `read_attribute` looks up a named data attribute on the element being
/// styled; it is only called by linear and passthrough mappings.
///
/// | mapping | kind | result |
/// |---------|------|--------|
/// | value | number | the number |
/// | value | color | the precomputed `rgb(r, g, b)` text |
/// | passthrough | any | the attribute, verbatim |
/// | linear | number | the attribute interpolated onto the range |
/// | linear | color | each channel interpolated, rendered `rgb(r, g, b)` |
///
/// Interpolation is not clamped: inputs outside the domain extrapolate.
/// Channels are not rounded, so midway between black and white is
/// `rgb(127.5, 127.5, 127.5)`. A spec with an empty domain yields NaN or
/// infinities.
///
/// # Errors
///
/// Returns [`EvaluationError::NonNumericAttribute`] when a linear mapping
/// reads an attribute that is neither a JSON number nor a numeric string.
///
/// # Example
///
/// ```rust
/// use netstyle::{evaluate, StyleSpec};
/// use serde_json::{json, Value};
///
/// let spec = StyleSpec::linear_color("score", 0.0, 100.0, "#000000", "#ffffff").unwrap();
/// let fill = evaluate(&spec, |name| {
///     if name == "score" { json!(50) } else { Value::Null }
/// })
/// .unwrap();
/// assert_eq!(fill.as_str(), Some("rgb(127.5, 127.5, 127.5)"));
/// ```
pub fn evaluate<F>(spec: &StyleSpec, read_attribute: F) -> Result<StyleValue, EvaluationError>
where
    F: Fn(&str) -> Value,
{
    match spec.rule() {
        Rule::Number(n) => Ok(StyleValue::Number(*n)),
        Rule::Color(_) => Ok(StyleValue::Text(spec.display_string().to_string())),
        Rule::Passthrough { attribute, .. } => Ok(StyleValue::Data(read_attribute(attribute))),
        Rule::LinearNumber(map) => {
            let x = numeric_attribute(map.attribute(), read_attribute(map.attribute()))?;
            let (low, high) = map.range();
            Ok(StyleValue::Number(interpolate(x, map.domain(), (low, high))))
        }
        Rule::LinearColor(map) => {
            let x = numeric_attribute(map.attribute(), read_attribute(map.attribute()))?;
            let (low, high) = map.range();
            let [r, g, b] = channel_pairs(low.channels(), high.channels())
                .map(|range| interpolate(x, map.domain(), range));
            Ok(StyleValue::Text(format!("rgb({}, {}, {})", r, g, b)))
        }
    }
}

/// Maps `x` from `domain` onto `range` along a straight line.
///
/// No clamping is applied, and a zero-width domain is not special-cased.
pub fn interpolate(x: f64, (x1, x2): (f64, f64), (f1, f2): (f64, f64)) -> f64 {
    let t = (x - x1) / (x2 - x1);
    f1 + t * (f2 - f1)
}

fn channel_pairs(low: [f64; 3], high: [f64; 3]) -> [(f64, f64); 3] {
    [(low[0], high[0]), (low[1], high[1]), (low[2], high[2])]
}

fn numeric_attribute(attribute: &str, value: Value) -> Result<f64, EvaluationError> {
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.ok_or_else(|| EvaluationError::NonNumericAttribute {
        attribute: attribute.to_string(),
        found: value,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        #[test]
        fn linear_number_hits_range_endpoints(
            domain_low in -1e4f64..1e4,
            width in 1e-3f64..1e4,
            range_low in -1e4f64..1e4,
            range_high in -1e4f64..1e4,
        ) {
            let domain_high = domain_low + width;
            let spec = StyleSpec::linear_number("x", domain_low, domain_high, range_low, range_high).unwrap();

            let at_low = evaluate(&spec, |_| json!(domain_low)).unwrap().as_f64().unwrap();
            let at_high = evaluate(&spec, |_| json!(domain_high)).unwrap().as_f64().unwrap();

            prop_assert!(close(at_low, range_low), "{} != {}", at_low, range_low);
            prop_assert!(close(at_high, range_high), "{} != {}", at_high, range_high);
        }

        #[test]
        fn linear_number_extrapolates_past_domain(
            domain_low in -1e3f64..1e3,
            width in 1e-1f64..1e3,
            range_low in -1e3f64..1e3,
            range_high in -1e3f64..1e3,
        ) {
            let domain_high = domain_low + width;
            let spec = StyleSpec::linear_number("x", domain_low, domain_high, range_low, range_high).unwrap();

            let beyond = evaluate(&spec, |_| json!(domain_high + 10.0)).unwrap().as_f64().unwrap();
            let expected = range_high + 10.0 / width * (range_high - range_low);

            prop_assert!(
                (beyond - expected).abs() <= 1e-6 * expected.abs().max(1.0),
                "{} != {}", beyond, expected
            );
        }

        #[test]
        fn passthrough_is_verbatim(text in ".*", number in any::<i64>()) {
            let spec = StyleSpec::passthrough(crate::style::ValueKind::Color, "x");
            let value = json!({"text": text, "number": number});
            let result = evaluate(&spec, |_| value.clone()).unwrap();
            prop_assert_eq!(result, StyleValue::Data(value.clone()));
        }
    }
}
