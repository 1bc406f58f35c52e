//! Integration tests for loading stylesheets from disk.

use std::fs;

use netstyle::{StyleSpec, StyleValue, Stylesheet, StylesheetError, Target, ValueKind};
use serde_json::json;
use tempfile::TempDir;

const YAML_SHEET: &str = r##"
defaults: true
node:
  background-color:
    linear:
      data: score
      domain: [0, 100]
      range: ["#000000", "#ffffff"]
  width:
    linear:
      data: weight
      domain: [0, 10]
      range: [5, 25]
edge:
  line-color:
    data: color
"##;

#[test]
fn test_load_yaml_file_and_compute() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.yaml");
    fs::write(&path, YAML_SHEET).unwrap();

    let sheet = Stylesheet::from_path(&path).unwrap();

    let node = json!({"score": 50, "weight": 5});
    let style = sheet.compute(Target::Node, &node).unwrap();
    assert_eq!(
        style["background-color"],
        StyleValue::Text("rgb(127.5, 127.5, 127.5)".to_string())
    );
    assert_eq!(style["width"], StyleValue::Number(15.0));
    assert_eq!(style["height"], StyleValue::Number(30.0));

    let edge = json!({"color": "tomato"});
    let style = sheet.compute(Target::Edge, &edge).unwrap();
    assert_eq!(style["line-color"], StyleValue::Data(json!("tomato")));
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.JSON");
    fs::write(&path, r#"{"edge": {"line-color": {"r": 10, "g": 20, "b": 30}}}"#).unwrap();

    let sheet = Stylesheet::from_path(&path).unwrap();
    assert_eq!(
        sheet.get(Target::Edge, "line-color"),
        Some(&StyleSpec::color((10, 20, 30)).unwrap())
    );
    assert!(sheet.get(Target::Node, "width").is_none());
}

#[test]
fn test_declarations_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.yml");
    fs::write(&path, YAML_SHEET).unwrap();

    let sheet = Stylesheet::from_path(&path).unwrap();
    let declarations = sheet.to_declarations();

    assert_eq!(declarations[0]["selector"], json!("node"));
    assert_eq!(
        declarations[0]["style"]["background-color"],
        json!("mapData(score, 0, 100, rgb(0, 0, 0), rgb(255, 255, 255))")
    );
    assert_eq!(declarations[0]["style"]["height"], json!("30"));
    assert_eq!(declarations[1]["selector"], json!("edge"));
    assert_eq!(declarations[1]["style"]["line-color"], json!("data(color)"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = Stylesheet::from_path(&path).unwrap_err();
    assert!(matches!(err, StylesheetError::ReadError { .. }));
}

#[test]
fn test_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.toml");
    fs::write(&path, "").unwrap();

    let err = Stylesheet::from_path(&path).unwrap_err();
    assert_eq!(err, StylesheetError::UnknownFormat { path });
}

#[test]
fn test_file_with_misordered_domain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(
        &path,
        "node:\n  width:\n    linear: {data: w, domain: [5, 1], range: [1, 2]}\n",
    )
    .unwrap();

    let err = Stylesheet::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("misordered range"), "{err}");
}

#[test]
fn test_passthrough_spec_kind_follows_property() {
    let sheet = Stylesheet::from_yaml_str("node:\n  width:\n    data: size\n").unwrap();
    let spec = sheet.get(Target::Node, "width").unwrap();
    assert_eq!(spec.kind(), ValueKind::Number);
}
