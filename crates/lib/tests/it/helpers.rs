use anexo::{AttrMap, Error};

// ==========================
// MAP FACTORIES
// ==========================

/// Builds an AttrMap from (key, value) text pairs.
pub fn map_of(pairs: &[(&str, &str)]) -> AttrMap {
    pairs
        .iter()
        .fold(AttrMap::new(), |map, (key, value)| map.with(*key, *value))
}

/// Parses attribute text the test expects to be well-formed.
pub fn parse_ok(text: &str) -> AttrMap {
    AttrMap::parse(text).unwrap_or_else(|err| panic!("Failed to parse {text:?}: {err}"))
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Helper for checking malformed-text errors and the byte they point at.
pub fn assert_malformed_at(result: anexo::Result<AttrMap>, offset: usize) {
    match result {
        Err(Error::Attr(err)) => {
            assert!(err.is_malformed_text());
            assert_eq!(err.offset(), offset, "error points at the wrong byte: {err}");
        }
        other => panic!("Expected MalformedText error, got {other:?}"),
    }
}
