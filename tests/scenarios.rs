//! End-to-end style mapping scenarios through the public API.

use netstyle::{
    evaluate, is_edge_property, is_node_property, Mapping, StyleSpec, StyleSpecError, StyleValue,
    ValueKind,
};
use serde_json::{json, Value};

#[test]
fn test_linear_number_midpoint() {
    let spec = StyleSpec::linear_number("weight", 0.0, 10.0, 5.0, 25.0).unwrap();
    let value = evaluate(&spec, |attr| {
        if attr == "weight" {
            json!(5)
        } else {
            Value::Null
        }
    })
    .unwrap();
    assert_eq!(value, StyleValue::Number(15.0));
}

#[test]
fn test_linear_color_midpoint() {
    let spec = StyleSpec::linear_color("score", 0.0, 100.0, "#000000", "#ffffff").unwrap();
    let value = evaluate(&spec, |_| json!(50)).unwrap();
    assert_eq!(value.to_string(), "rgb(127.5, 127.5, 127.5)");
}

#[test]
fn test_flat_number_regardless_of_data() {
    let spec = StyleSpec::number(42.0);
    for data in [json!(1), json!("x"), Value::Null] {
        let value = evaluate(&spec, |_| data.clone()).unwrap();
        assert_eq!(value.as_f64(), Some(42.0));
    }
}

#[test]
fn test_extrapolation_past_domain_high() {
    let spec = StyleSpec::linear_number("weight", 0.0, 10.0, 5.0, 25.0).unwrap();
    let value = evaluate(&spec, |_| json!(20)).unwrap();
    assert_eq!(value.as_f64(), Some(45.0));
}

#[test]
fn test_equal_colors_give_equal_raw_values() {
    let from_hex = StyleSpec::color("#888888").unwrap();
    let from_triple = StyleSpec::color((136, 136, 136)).unwrap();
    assert_eq!(from_hex.rule(), from_triple.rule());
}

#[test]
fn test_misordered_domain_fails_before_evaluation() {
    let number = StyleSpec::linear_number("w", 2.0, 1.0, 0.0, 1.0);
    let color = StyleSpec::linear_color("w", 2.0, 1.0, "red", "blue");
    assert!(matches!(number, Err(StyleSpecError::InvalidRange { .. })));
    assert!(matches!(color, Err(StyleSpecError::InvalidRange { .. })));
}

#[test]
fn test_unparseable_colors_fail() {
    assert!(matches!(
        StyleSpec::color("chartreuse-ish"),
        Err(StyleSpecError::InvalidColor { .. })
    ));
    assert!(matches!(
        StyleSpec::linear_color("w", 0.0, 1.0, "chartreuse-ish", "blue"),
        Err(StyleSpecError::InvalidColor { .. })
    ));
}

#[test]
fn test_passthrough_is_unmodified() {
    let spec = StyleSpec::passthrough(ValueKind::Number, "label");
    assert_eq!(spec.mapping(), Mapping::Passthrough);

    let data = json!({"not": ["a", "number"]});
    let value = evaluate(&spec, |_| data.clone()).unwrap();
    assert_eq!(value, StyleValue::Data(data));
}

#[test]
fn test_property_membership() {
    assert!(is_node_property("width"));
    assert!(!is_node_property("line-color"));
    assert!(is_edge_property("line-color"));
}
