//! Tests for map operations: lookup states, merge, removal and equality.

use anexo::Value;

use crate::helpers::*;

#[test]
fn null_empty_and_absent_are_three_states() {
    let map = parse_ok(r#"acabado => NULL, nota => "", color => Rojo"#);

    // Null: present, no text.
    assert_eq!(map.get("acabado"), Some(&Value::Null));
    assert!(map.contains_key("acabado"));
    assert_eq!(map.get_text("acabado"), None);

    // Empty string: present, empty text.
    assert_eq!(map.get("nota"), Some(&Value::Text(String::new())));
    assert_eq!(map.get_text("nota"), Some(""));

    // Absent: no entry at all.
    assert_eq!(map.get("talla"), None);
    assert!(!map.contains_key("talla"));
}

#[test]
fn merge_overwrites_and_adds_preserving_others() {
    let mut map = parse_ok("color => Rojo, tipo => Escritorio, peso => 68kg");
    let operand = parse_ok("peso => 79kg, garantia => 2 años");

    map.merge(&operand);

    assert_eq!(map.get_text("peso"), Some("79kg"));
    assert_eq!(map.get_text("garantia"), Some("2 años"));
    assert_eq!(map.get_text("color"), Some("Rojo"));
    assert_eq!(map.get_text("tipo"), Some("Escritorio"));
    assert_eq!(map.len(), 4);
}

#[test]
fn merge_twice_equals_merge_once() {
    let operand = parse_ok("peso => 79kg");

    let mut once = parse_ok("color => Rojo, peso => 68kg");
    let mut twice = once.clone();
    once.merge(&operand);
    twice.merge(&operand).merge(&operand);

    assert_eq!(once, twice);
}

#[test]
fn merge_with_null_overwrites_text() {
    let mut map = parse_ok("acabado => mate");
    map.merge(&parse_ok("acabado => NULL"));
    assert_eq!(map.get("acabado"), Some(&Value::Null));
}

#[test]
fn remove_affects_only_the_named_key() {
    let mut map = parse_ok("color => Blanco, tipo => Mouse, dpi => 16000");

    let prior = map.remove("color");
    assert_eq!(prior, Some(Value::Text("Blanco".to_string())));
    assert!(!map.contains_key("color"));
    assert_eq!(map.get_text("tipo"), Some("Mouse"));
    assert_eq!(map.get_text("dpi"), Some("16000"));

    // Removing again is a quiet no-op.
    assert_eq!(map.remove("color"), None);
    assert_eq!(map.len(), 2);
}

#[test]
fn equality_depends_on_pairs_not_history() {
    let mut grown = parse_ok("color => Rojo");
    grown.set("tipo", "Mouse");

    let parsed = parse_ok("tipo => Mouse, color => Rojo");
    assert_eq!(grown, parsed);

    grown.remove("color");
    assert_ne!(grown, parsed);
}

#[test]
fn keys_iterate_in_sorted_order() {
    let map = parse_ok("zeta => 1, alfa => 2, media => 3");
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["alfa", "media", "zeta"]);
}

#[test]
fn round_trip_preserves_every_value_state() {
    let source = map_of(&[("talla", "US 10"), ("cita", r#"con "comillas""#)])
        .with("acabado", Value::Null);

    let reparsed = parse_ok(&source.to_text());
    assert_eq!(reparsed, source);
}
