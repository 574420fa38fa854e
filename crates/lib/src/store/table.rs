use std::{collections::BTreeMap, marker::PhantomData};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Result,
    attrs::{AttrMap, MergeOperand},
    store::{Attributed, errors::StoreError},
};

/// A row-based in-memory store for attribute-carrying records.
///
/// `Table` provides a record-oriented storage abstraction similar to a
/// database table with automatic primary key generation: rows go in, UUID
/// keys come back, and the attribute column is reachable through
/// parse/operate/format helpers without the caller ever touching the text
/// form.
///
/// # Features
/// - Automatically generates UUIDv4 primary keys for new records
/// - Provides CRUD operations (Create, Read, Update, Delete) for record-based data
/// - Supports searching across all records with a predicate function
/// - Composes the attribute engine at the storage boundary: rows are stored
///   as serialized text, attribute text is parsed on load and written back
///   on save
///
/// # Type Parameters
/// - `R`: The record type to be stored, which must expose its attribute
///   column via [`Attributed`] and be serializable, deserializable, and
///   cloneable
///
/// Mutating operations take `&mut self`; a multi-threaded embedder wraps the
/// table in its own synchronization.
pub struct Table<R>
where
    R: Attributed + Serialize + for<'de> Deserialize<'de> + Clone,
{
    name: String,
    rows: BTreeMap<String, String>,
    phantom: PhantomData<R>,
}

impl<R> Table<R>
where
    R: Attributed + Serialize + for<'de> Deserialize<'de> + Clone,
{
    /// Creates an empty table with the given name.
    ///
    /// The name appears in error values and log events, nowhere else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            phantom: PhantomData,
        }
    }

    /// Returns the name of this table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inserts a new row and returns its generated primary key.
    ///
    /// # Errors
    /// Returns `StoreError::SerializationFailed` if the row cannot be
    /// serialized.
    pub fn insert(&mut self, row: R) -> Result<String> {
        let primary_key = Uuid::new_v4().to_string();
        let serialized = self.serialize_row(&row)?;
        self.rows.insert(primary_key.clone(), serialized);

        tracing::debug!(table = %self.name, key = %primary_key, "Inserted record");
        Ok(primary_key)
    }

    /// Retrieves a row by its primary key.
    ///
    /// # Errors
    /// Returns `StoreError::RecordNotFound` if no row exists under the key,
    /// or `StoreError::DeserializationFailed` if the stored text does not
    /// decode as `R`.
    pub fn get(&self, key: impl AsRef<str>) -> Result<R> {
        let key = key.as_ref();
        match self.rows.get(key) {
            Some(text) => self.deserialize_row(key, text),
            None => Err(StoreError::RecordNotFound {
                table: self.name.clone(),
                key: key.to_string(),
            }
            .into()),
        }
    }

    /// Replaces the row under `key`, creating it if absent.
    ///
    /// # Errors
    /// Returns `StoreError::SerializationFailed` if the row cannot be
    /// serialized.
    pub fn set(&mut self, key: impl AsRef<str>, row: R) -> Result<()> {
        let key = key.as_ref();
        let serialized = self.serialize_row(&row)?;
        self.rows.insert(key.to_string(), serialized);

        tracing::debug!(table = %self.name, key = key, "Stored record");
        Ok(())
    }

    /// Deletes a row by its primary key.
    ///
    /// Returns `Ok(true)` if a row existed and was deleted, `Ok(false)` if
    /// no row was stored under the key.
    pub fn delete(&mut self, key: impl AsRef<str>) -> Result<bool> {
        let key = key.as_ref();
        let removed = self.rows.remove(key).is_some();
        if removed {
            tracing::debug!(table = %self.name, key = key, "Deleted record");
        }
        Ok(removed)
    }

    /// Searches for rows matching a predicate function.
    ///
    /// Returns `(primary_key, record)` pairs for every row the predicate
    /// accepts, in key order.
    ///
    /// # Errors
    /// Returns `StoreError::DeserializationFailed` if any stored row does
    /// not decode as `R`.
    pub fn search(&self, query: impl Fn(&R) -> bool) -> Result<Vec<(String, R)>> {
        let mut result = Vec::new();
        for (key, text) in &self.rows {
            let row = self.deserialize_row(key, text)?;
            if query(&row) {
                result.push((key.clone(), row));
            }
        }
        Ok(result)
    }

    /// Loads and parses the attribute map of the row under `key`.
    ///
    /// This is the load half of the storage boundary. A malformed attribute
    /// column fails the whole load: the parse error propagates unchanged,
    /// fragment and offset intact, with no empty-map fallback.
    pub fn attrs(&self, key: impl AsRef<str>) -> Result<AttrMap> {
        let row = self.get(key)?;
        AttrMap::parse(row.attrs_text())
    }

    /// Merges `operand` into the attribute map of the row under `key` and
    /// saves the result, returning the updated map.
    ///
    /// Attribute keys named by the operand are overwritten or added; all
    /// others keep their stored values.
    pub fn merge_attrs(&mut self, key: impl AsRef<str>, operand: &MergeOperand) -> Result<AttrMap> {
        let key = key.as_ref();
        let mut row = self.get(key)?;
        let mut attrs = AttrMap::parse(row.attrs_text())?;

        attrs.merge(operand);
        row.set_attrs_text(attrs.to_text());
        self.save_row(key, &row)?;

        tracing::debug!(table = %self.name, key = key, "Merged attributes");
        Ok(attrs)
    }

    /// Removes one attribute key from the row under `key` and saves the
    /// result, returning the updated map.
    ///
    /// Removing an attribute the row does not have is a no-op, not an
    /// error; the map is saved back unchanged.
    pub fn remove_attr(
        &mut self,
        key: impl AsRef<str>,
        attr_key: impl AsRef<str>,
    ) -> Result<AttrMap> {
        let key = key.as_ref();
        let attr_key = attr_key.as_ref();
        let mut row = self.get(key)?;
        let mut attrs = AttrMap::parse(row.attrs_text())?;

        attrs.remove(attr_key);
        row.set_attrs_text(attrs.to_text());
        self.save_row(key, &row)?;

        tracing::debug!(table = %self.name, key = key, attr = attr_key, "Removed attribute");
        Ok(attrs)
    }

    /// Searches for rows whose attribute map holds exactly `value` under
    /// `attr_key`.
    ///
    /// Matching is exact text equality: no case folding, no trimming.
    /// Null-valued and absent attribute keys never match.
    ///
    /// # Errors
    /// Fails if any row does not decode as `R` or carries a malformed
    /// attribute column.
    pub fn find_by_attr(
        &self,
        attr_key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Vec<(String, R)>> {
        let attr_key = attr_key.as_ref();
        let value = value.as_ref();

        let mut result = Vec::new();
        for (key, text) in &self.rows {
            let row = self.deserialize_row(key, text)?;
            let attrs = AttrMap::parse(row.attrs_text())?;
            if attrs.get_text(attr_key) == Some(value) {
                result.push((key.clone(), row));
            }
        }
        Ok(result)
    }

    fn serialize_row(&self, row: &R) -> Result<String> {
        serde_json::to_string(row).map_err(|e| {
            StoreError::SerializationFailed {
                table: self.name.clone(),
                reason: format!("failed to serialize record: {e}"),
            }
            .into()
        })
    }

    fn deserialize_row(&self, key: &str, text: &str) -> Result<R> {
        serde_json::from_str(text).map_err(|e| {
            StoreError::DeserializationFailed {
                table: self.name.clone(),
                reason: format!("failed to deserialize record for key '{key}': {e}"),
            }
            .into()
        })
    }

    fn save_row(&mut self, key: &str, row: &R) -> Result<()> {
        let serialized = self.serialize_row(row)?;
        self.rows.insert(key.to_string(), serialized);
        Ok(())
    }
}
