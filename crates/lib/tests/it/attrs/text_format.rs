//! Tests for the attribute text grammar: parsing, canonical output and
//! error reporting.

use anexo::{AttrMap, Error, Value};

use crate::helpers::*;

#[test]
fn parse_accepts_bare_and_quoted_pairs() {
    let map = parse_ok(r#"color => Rojo, "talla" => "US 10", dimensiones=>120x60cm"#);
    assert_eq!(map.get_text("color"), Some("Rojo"));
    assert_eq!(map.get_text("talla"), Some("US 10"));
    assert_eq!(map.get_text("dimensiones"), Some("120x60cm"));
    assert_eq!(map.len(), 3);
}

#[test]
fn bare_tokens_trim_edges_but_keep_internal_whitespace() {
    let map = parse_ok("  talla  =>  US 10  , tipo => Zapatillas deportivas");
    assert_eq!(map.get_text("talla"), Some("US 10"));
    assert_eq!(map.get_text("tipo"), Some("Zapatillas deportivas"));
}

#[test]
fn quoted_tokens_preserve_whitespace_and_delimiters() {
    let map = parse_ok(r#""nota interna" => " margen: 2,5 => 3,0 ""#);
    assert_eq!(map.get_text("nota interna"), Some(" margen: 2,5 => 3,0 "));
}

#[test]
fn doubled_quotes_stand_for_literal_quotes() {
    let map = parse_ok(r#"cita => "di ""hola"" fuerte""#);
    assert_eq!(map.get_text("cita"), Some(r#"di "hola" fuerte"#));
}

#[test]
fn null_marker_is_case_insensitive_and_bare_only() {
    let map = parse_ok(r#"a => NULL, b => null, c => Null, d => "NULL""#);
    for key in ["a", "b", "c"] {
        assert!(map.get(key).is_some_and(Value::is_null), "key {key} should be null");
    }
    // Quoted NULL is the four-character text, not the marker.
    assert_eq!(map.get_text("d"), Some("NULL"));
}

#[test]
fn empty_and_whitespace_only_input_parse_to_an_empty_map() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok(" \t\n ").is_empty());
}

#[test]
fn duplicate_keys_resolve_last_write_wins() {
    let map = parse_ok("color=>Negro, color=>Rojo");
    assert_eq!(map.get_text("color"), Some("Rojo"));
    assert_eq!(map.len(), 1);
}

#[test]
fn canonical_output_is_sorted_and_unquotes_unambiguous_tokens() {
    let map = parse_ok(r#"tipo => Escritorio, "dimensiones" => "120x60cm", color => Rojo"#);
    assert_eq!(
        map.to_text(),
        "color=>Rojo, dimensiones=>120x60cm, tipo=>Escritorio"
    );
}

#[test]
fn canonical_output_quotes_what_needs_quoting() {
    let map = map_of(&[("formula", "a=>b"), ("nota", " borde "), ("vacio", "")])
        .with("acabado", Value::Null);
    assert_eq!(
        map.to_text(),
        r#"acabado=>NULL, formula=>"a=>b", nota=>" borde ", vacio=>"""#
    );
}

#[test]
fn display_and_from_str_round_trip() {
    let source = r#"peso => 68kg, "garantia" => "2 años", acabado => NULL"#;
    let map: AttrMap = source.parse().unwrap();

    let rendered = map.to_string();
    assert_eq!(rendered, "acabado=>NULL, garantia=>2 años, peso=>68kg");

    let back: AttrMap = rendered.parse().unwrap();
    assert_eq!(back, map);
}

#[test]
fn malformed_inputs_report_byte_offsets() {
    // Unterminated quote points at the opening quote.
    assert_malformed_at(AttrMap::parse(r#"color => "Rojo"#), 9);
    // Missing arrow points at the character where `=>` was expected.
    assert_malformed_at(AttrMap::parse("color = Rojo"), 6);
    // Empty key points at the start of the missing token.
    assert_malformed_at(AttrMap::parse("=> Rojo"), 0);
    // Trailing comma points past the comma.
    assert_malformed_at(AttrMap::parse("color => Rojo,"), 14);
    // A key with no pair left points at the end of input.
    assert_malformed_at(AttrMap::parse("color => Rojo, tipo"), 19);
    // Stray characters after a closed quote.
    assert_malformed_at(AttrMap::parse(r#"a => "b" extra"#), 9);
}

#[test]
fn empty_keys_and_empty_bare_values_are_malformed() {
    assert_malformed_at(AttrMap::parse(r#""" => x"#), 0);
    assert_malformed_at(AttrMap::parse("k =>"), 4);
    assert_malformed_at(AttrMap::parse("k => , j => 2"), 5);
}

#[test]
fn fragment_preview_truncates_long_input() {
    let long_tail = "x".repeat(60);
    match AttrMap::parse(&format!("key == {long_tail}")) {
        Err(Error::Attr(err)) => {
            assert_eq!(err.offset(), 4);
            assert_eq!(err.fragment().chars().count(), 20);
            assert!(err.fragment().starts_with("== x"));
        }
        other => panic!("Expected MalformedText error, got {other:?}"),
    }
}
