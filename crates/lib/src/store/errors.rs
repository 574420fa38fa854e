//! Error types for host-table operations.
//!
//! Everything a [`Table`](crate::store::Table) can fail with on its own lives
//! here. Attribute text problems are not re-wrapped: a malformed column
//! surfaces as the engine's [`AttrError`](crate::attrs::AttrError) so callers
//! see the fragment and offset unchanged.

use thiserror::Error;

/// Error types for host-table operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row stored under the given key
    #[error("record not found in table '{table}': {key}")]
    RecordNotFound { table: String, key: String },

    /// Row could not be serialized for storage
    #[error("serialization failed in table '{table}': {reason}")]
    SerializationFailed { table: String, reason: String },

    /// Stored row text could not be deserialized
    #[error("deserialization failed in table '{table}': {reason}")]
    DeserializationFailed { table: String, reason: String },
}

impl StoreError {
    /// Check if this error indicates a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::RecordNotFound { .. })
    }

    /// Check if this error is related to row (de)serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }

    /// Get the table name associated with this error
    pub fn table_name(&self) -> &str {
        match self {
            StoreError::RecordNotFound { table, .. }
            | StoreError::SerializationFailed { table, .. }
            | StoreError::DeserializationFailed { table, .. } => table,
        }
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreError::RecordNotFound { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
