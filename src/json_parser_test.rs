//! Tests for `json_parser`.

use crate::error::VisError;
use crate::json_parser::{load_document, parse, parse_reader, read_input};
use crate::types::NodeKind;

const C1: &str = r#"{"C1": {"nodes": {"a": {"type_": "Input"}, "b": {"type_": "Output"}},
  "edges": {"e": [{"source": "a", "sink": ["b", "w1"]}]}}}"#;

#[test]
fn parse_single_circuit() {
  let doc = parse(C1).unwrap();
  assert_eq!(doc.len(), 1);
  let c1 = &doc.circuits["C1"];
  assert_eq!(c1.nodes["a"].type_, NodeKind::input());
  assert_eq!(c1.nodes["b"].type_, NodeKind::output());
  let wire = c1.wires().next().unwrap();
  assert_eq!(wire.source, "a");
  assert_eq!(wire.sink_node(), "b");
  assert_eq!(wire.sink_port(), "w1");
}

#[test]
fn parse_empty_document() {
  let doc = parse("{}").unwrap();
  assert!(doc.is_empty());
}

#[test]
fn invalid_json_is_malformed() {
  let e = parse("{\"C1\": ").unwrap_err();
  assert!(e.is_malformed_input());
}

#[test]
fn top_level_array_is_malformed() {
  assert!(parse("[]").unwrap_err().is_malformed_input());
}

#[test]
fn unknown_type_shape_is_malformed() {
  let src = r#"{"C": {"nodes": {"n": {"type_": {"Foo": "x"}}}, "edges": {}}}"#;
  assert!(matches!(parse(src), Err(VisError::MalformedInput { .. })));
}

#[test]
fn missing_type_field_is_malformed() {
  let src = r#"{"C": {"nodes": {"n": {}}, "edges": {}}}"#;
  assert!(parse(src).unwrap_err().is_malformed_input());
}

#[test]
fn short_sink_is_malformed() {
  let src = r#"{"C": {"nodes": {}, "edges": {"a": [{"source": "a", "sink": ["b"]}]}}}"#;
  assert!(parse(src).unwrap_err().is_malformed_input());
}

#[test]
fn parse_reader_matches_parse() {
  let doc = parse_reader(C1.as_bytes()).unwrap();
  assert_eq!(doc, parse(C1).unwrap());
}

#[test]
fn read_input_from_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("circuits.json");
  std::fs::write(&path, C1).unwrap();
  assert_eq!(read_input(Some(&path)).unwrap(), C1);
  assert_eq!(load_document(Some(&path)).unwrap().len(), 1);
}

#[test]
fn read_input_missing_file_names_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nope.json");
  let e = read_input(Some(&path)).unwrap_err();
  assert!(matches!(e, VisError::ReadInput { .. }));
  assert!(e.to_string().contains("nope.json"));
}
