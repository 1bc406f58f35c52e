//! Serialized form of [`StyleSpec`].
//!
//! A spec travels as a flat record, with the payload shape depending on the
//! mapping:
//!
//! | mapping | value |
//! |---------|-------|
//! | `value` | a number, or `{r, g, b}` / color text |
//! | `linear` | `{attributeName, domainLow, domainHigh, rangeLow, rangeHigh}` |
//! | `passthrough` | `{data: attributeName}` |
//!
//! `display` is written for consumers but ignored on the way in; it is
//! always recomputed by the factory.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::StyleSpecError;
use super::spec::{LinearMap, Mapping, Rule, StyleSpec, ValueKind};
use crate::color::ColorInput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SpecRecord {
    #[serde(rename = "type")]
    kind: ValueKind,
    mapping: Mapping,
    value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct PassthroughRecord {
    data: String,
}

impl From<StyleSpec> for SpecRecord {
    fn from(spec: StyleSpec) -> Self {
        let kind = spec.kind();
        let mapping = spec.mapping();
        let value = match spec.rule {
            Rule::Number(number) => serde_json::json!(number),
            Rule::Color(rgb) => serde_json::json!(rgb),
            Rule::LinearNumber(map) => serde_json::json!(map),
            Rule::LinearColor(map) => serde_json::json!(map),
            Rule::Passthrough { attribute, .. } => {
                serde_json::json!(PassthroughRecord { data: attribute })
            }
        };
        SpecRecord {
            kind,
            mapping,
            value,
            display: Some(spec.display),
        }
    }
}

impl TryFrom<SpecRecord> for StyleSpec {
    type Error = StyleSpecError;

    fn try_from(record: SpecRecord) -> Result<Self, Self::Error> {
        let SpecRecord {
            kind,
            mapping,
            value,
            ..
        } = record;
        let unsupported = |detail: String| StyleSpecError::UnsupportedMapping {
            kind,
            mapping,
            detail,
        };

        match (mapping, kind) {
            (Mapping::Value, ValueKind::Number) => value
                .as_f64()
                .map(StyleSpec::number)
                .ok_or_else(|| unsupported(format!("expected a number, found {}", value))),
            (Mapping::Value, ValueKind::Color) => {
                let input: ColorInput =
                    serde_json::from_value(value).map_err(|e| unsupported(e.to_string()))?;
                StyleSpec::color(input)
            }
            (Mapping::Linear, ValueKind::Number) => {
                let map: LinearMap<f64> =
                    serde_json::from_value(value).map_err(|e| unsupported(e.to_string()))?;
                StyleSpec::linear_number(
                    map.attribute,
                    map.domain_low,
                    map.domain_high,
                    map.range_low,
                    map.range_high,
                )
            }
            (Mapping::Linear, ValueKind::Color) => {
                let map: LinearMap<ColorInput> =
                    serde_json::from_value(value).map_err(|e| unsupported(e.to_string()))?;
                StyleSpec::linear_color(
                    map.attribute,
                    map.domain_low,
                    map.domain_high,
                    map.range_low,
                    map.range_high,
                )
            }
            (Mapping::Passthrough, kind) => {
                let record: PassthroughRecord =
                    serde_json::from_value(value).map_err(|e| unsupported(e.to_string()))?;
                Ok(StyleSpec::passthrough(kind, record.data))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use serde_json::json;

    #[test]
    fn test_serialize_linear_color() {
        let spec = StyleSpec::linear_color("score", 0.0, 100.0, "black", "white").unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "color",
                "mapping": "linear",
                "value": {
                    "attributeName": "score",
                    "domainLow": 0.0,
                    "domainHigh": 100.0,
                    "rangeLow": {"r": 0, "g": 0, "b": 0},
                    "rangeHigh": {"r": 255, "g": 255, "b": 255},
                },
                "display": "mapData(score, 0, 100, rgb(0, 0, 0), rgb(255, 255, 255))",
            })
        );
    }

    #[test]
    fn test_serialize_passthrough() {
        let spec = StyleSpec::passthrough(ValueKind::Number, "size");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["value"], json!({"data": "size"}));
        assert_eq!(json["mapping"], json!("passthrough"));
    }

    #[test]
    fn test_deserialize_reruns_factory() {
        let spec: StyleSpec = serde_json::from_value(json!({
            "type": "color",
            "mapping": "value",
            "value": "#888",
            "display": "ignored",
        }))
        .unwrap();
        assert_eq!(spec.rule(), &Rule::Color(Rgb::new(136, 136, 136)));
        assert_eq!(spec.display_string(), "rgb(136, 136, 136)");
    }

    #[test]
    fn test_deserialize_misordered_domain_fails() {
        let result: Result<StyleSpec, _> = serde_json::from_value(json!({
            "type": "number",
            "mapping": "linear",
            "value": {
                "attributeName": "w",
                "domainLow": 5,
                "domainHigh": 1,
                "rangeLow": 0,
                "rangeHigh": 1,
            },
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("misordered range"), "{err}");
    }

    #[test]
    fn test_deserialize_shape_mismatch_is_unsupported() {
        let record: SpecRecord = serde_json::from_value(json!({
            "type": "number",
            "mapping": "value",
            "value": {"data": "w"},
        }))
        .unwrap();
        let err = StyleSpec::try_from(record).unwrap_err();
        assert!(matches!(
            err,
            StyleSpecError::UnsupportedMapping {
                kind: ValueKind::Number,
                mapping: Mapping::Value,
                ..
            }
        ));
    }

    #[test]
    fn test_deserialize_unknown_mapping_fails() {
        let result: Result<StyleSpec, _> = serde_json::from_value(json!({
            "type": "number",
            "mapping": "exponential",
            "value": 1,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_flat_number_does_not_come_back() {
        let json = serde_json::to_value(StyleSpec::number(f64::INFINITY)).unwrap();
        assert_eq!(json["value"], Value::Null);

        let err = StyleSpec::try_from(serde_json::from_value::<SpecRecord>(json).unwrap())
            .unwrap_err();
        assert!(matches!(err, StyleSpecError::UnsupportedMapping { .. }));
    }
}
