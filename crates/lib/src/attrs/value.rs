//! Value types for attribute maps.
//!
//! This module provides the [`Value`] enum representing a single attribute
//! value. Values are either UTF-8 text or the explicit null marker; richer
//! types are out of scope for the attribute column, which is a text format
//! end to end.

use std::fmt;

/// A single attribute value: text or the explicit null marker.
///
/// `Null` is a stored value in its own right, distinct from both the empty
/// string and the absence of a key. The three states stay observable through
/// [`AttrMap::get`](crate::AttrMap::get):
///
/// ```
/// use anexo::AttrMap;
/// use anexo::attrs::Value;
///
/// let map = AttrMap::parse(r#"color=>Rojo, acabado=>NULL, nota=>"""#).unwrap();
/// assert_eq!(map.get("color"), Some(&Value::Text("Rojo".into())));
/// assert_eq!(map.get("acabado"), Some(&Value::Null));
/// assert_eq!(map.get("nota"), Some(&Value::Text(String::new())));
/// assert_eq!(map.get("peso"), None);
/// ```
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with string types for ergonomic assertions:
///
/// ```
/// # use anexo::attrs::Value;
/// let color = Value::Text("Rojo".to_string());
/// assert!(color == "Rojo");
/// assert!("Rojo" == color);
/// assert!(!(Value::Null == "Rojo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// UTF-8 text value
    Text(String),
    /// Explicit null marker (`NULL` in the text form)
    Null,
}

impl Value {
    /// Returns true if this value is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is text
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Attempts to view this value as text; `None` for the null marker
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Null => None,
        }
    }

    /// Consumes the value, yielding the text; `None` for the null marker
    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s),
            Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => write!(f, "NULL"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

/// `None` maps to the null marker, mirroring how nullable columns read.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

// PartialEq implementations for comparing Value with string types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            Value::Null => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
