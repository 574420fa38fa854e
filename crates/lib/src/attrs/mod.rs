//! Record-scoped attribute maps and their canonical text form.
//!
//! This module is the heart of the crate. An [`AttrMap`] maps string keys to
//! nullable string values ([`Value`]) and belongs to exactly one parent
//! record; it carries no identity of its own. The map supports point lookup,
//! overwrite-union merge, key removal and equality, and round-trips through
//! a `key=>value` text form so a host table can store it in an ordinary text
//! column.
//!
//! # Core Types
//!
//! - [`AttrMap`] - The attribute map itself
//! - [`Value`] - A stored value: text or the explicit null marker
//! - [`MergeOperand`] - The right-hand side of a merge (itself an `AttrMap`)
//! - [`AttrError`] - The single parse-time error
//!
//! # Usage
//!
//! ```
//! use anexo::{AttrMap, MergeOperand};
//!
//! let mut map = AttrMap::parse("color => Rojo, tipo => Escritorio, peso => 68kg")?;
//! assert_eq!(map.get_text("peso"), Some("68kg"));
//!
//! // Merge overwrites the operand's keys and leaves the rest alone.
//! let operand = MergeOperand::parse("peso => 79kg")?;
//! map.merge(&operand);
//! assert_eq!(map.get_text("peso"), Some("79kg"));
//! assert_eq!(map.get_text("color"), Some("Rojo"));
//!
//! // Removal affects one key only.
//! map.remove("color");
//! assert!(!map.contains_key("color"));
//! assert_eq!(map.to_text(), "peso=>79kg, tipo=>Escritorio");
//! # Ok::<(), anexo::Error>(())
//! ```
//!
//! # Text Form
//!
//! Pairs are comma-separated `key=>value` items. Keys and values are bare
//! tokens (edges trimmed, internal whitespace kept) or double-quoted tokens
//! (`""` for a literal quote). In value position the bare token `NULL`, any
//! ASCII case, is the null marker. [`AttrMap::to_text`] emits one canonical
//! rendering: keys sorted, pairs joined with `", "`, tokens quoted only when
//! a bare spelling would not read back identically.

use std::{collections::BTreeMap, fmt, str::FromStr};

mod errors;
mod text;
mod value;

pub use errors::AttrError;
pub use value::Value;

/// A partial attribute map supplied as the right-hand side of
/// [`AttrMap::merge`].
///
/// Structurally an ordinary [`AttrMap`], usually parsed from operand text
/// such as `peso => 79kg`. Every key it holds overwrites (or adds) the
/// target's entry for that key; target keys it does not mention are left
/// untouched.
pub type MergeOperand = AttrMap;

/// A set of named attributes attached to one parent record.
///
/// Keys are unique non-empty strings; values are [`Value::Text`] or the
/// explicit [`Value::Null`] marker. Entries are kept sorted by key, so
/// iteration order and the text form are deterministic and unaffected by
/// the order of earlier inserts or removals.
///
/// # Examples
///
/// ```
/// use anexo::AttrMap;
///
/// let mut map = AttrMap::new()
///     .with("color", "Blanco")
///     .with("tipo", "Mouse");
/// map.set("dpi", "16000");
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.to_text(), "color=>Blanco, dpi=>16000, tipo=>Mouse");
///
/// map.remove("color");
/// assert!(!map.contains_key("color"));
/// assert_eq!(map.get_text("dpi"), Some("16000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AttrMap {
    entries: BTreeMap<String, Value>,
}

impl AttrMap {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parses attribute text into a map.
    ///
    /// Empty or whitespace-only input yields an empty map. Duplicate keys
    /// resolve last-write-wins, matching merge semantics. This is the only
    /// fallible engine operation: unbalanced quotes, a missing `=>`, an
    /// empty key, a missing value, a trailing comma or stray characters all
    /// fail with [`AttrError::MalformedText`], which names the offending
    /// fragment and its byte offset.
    ///
    /// ```
    /// use anexo::AttrMap;
    ///
    /// let map = AttrMap::parse(r#"talla => US 10, "nota" => """#)?;
    /// assert_eq!(map.get_text("talla"), Some("US 10"));
    /// assert_eq!(map.get_text("nota"), Some(""));
    ///
    /// let err = AttrMap::parse("color => ").unwrap_err();
    /// assert!(err.is_malformed_text());
    /// # Ok::<(), anexo::Error>(())
    /// ```
    pub fn parse(input: &str) -> crate::Result<Self> {
        Ok(Self {
            entries: text::parse_entries(input)?,
        })
    }

    /// Renders the canonical text form.
    ///
    /// Pairs appear in key order, joined with `", "` and written `key=>value`
    /// with no space around the arrow. A token is quoted only when it is
    /// empty, contains `,`, `=`, `>` or `"`, has leading or trailing
    /// whitespace, or (in value position) would read back as the null
    /// marker. Null values are written as bare `NULL`.
    ///
    /// For any map whose keys are non-empty,
    /// `AttrMap::parse(&map.to_text())` reproduces the map exactly.
    pub fn to_text(&self) -> String {
        text::write_entries(&self.entries)
    }

    /// Gets a value by key.
    ///
    /// `None` means the key is absent; `Some(&Value::Null)` means the key is
    /// present with the null marker. The two are deliberately
    /// distinguishable.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// Gets a value's text by key, skipping null and absent entries.
    pub fn get_text(&self, key: impl AsRef<str>) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Returns true if the map contains the given key, null-valued or not.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Inserts or overwrites one entry, returning the prior value if any.
    ///
    /// Keys must be non-empty: an empty key has no text representation, so
    /// a map holding one cannot round-trip through [`AttrMap::to_text`].
    /// Parsed maps always satisfy this because [`AttrMap::parse`] rejects
    /// empty keys.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder variant of [`AttrMap::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Applies an overwrite-union merge.
    ///
    /// Every key in the operand replaces (or adds) this map's entry for that
    /// key; keys absent from the operand are untouched. The operation never
    /// fails and is idempotent: applying the same operand twice leaves the
    /// same map as applying it once.
    pub fn merge(&mut self, operand: &MergeOperand) -> &mut Self {
        for (key, value) in &operand.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    /// Removes one entry, returning its value if the key was present.
    ///
    /// Removing an absent key is a no-op, not an error. All other entries
    /// keep their values and their sorted order.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.entries.remove(key.as_ref())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Iterates over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl Default for AttrMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Displays the canonical text form, same as [`AttrMap::to_text`].
impl fmt::Display for AttrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for AttrMap {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BTreeMap<String, String>> for AttrMap {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k, Value::Text(v)))
                .collect(),
        }
    }
}

impl FromIterator<(String, Value)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for AttrMap {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
