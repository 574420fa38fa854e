//!
//! Anexo: embeddable attribute maps. Attach anything to any record.
//! This library provides a small key-value attribute engine plus the storage
//! boundary for embedding it in record-oriented hosts.
//!
//! ## Core Concepts
//!
//! Anexo is built around a few key concepts:
//!
//! * **Attribute maps (`attrs::AttrMap`)**: The central type. A per-record collection of string keys and nullable string values, with point lookup, overwrite-union merge, key removal and equality.
//! * **Values (`attrs::Value`)**: Text or the explicit null marker. Null, the empty string and an absent key are three distinct observable states.
//! * **Merge operands (`attrs::MergeOperand`)**: A partial map applied against a target; its keys overwrite, everything else is preserved.
//! * **The text form**: A canonical comma-separated `key=>value` serialization with double-quote escaping, produced by `to_text` and accepted by `parse`. Parsing is the only fallible engine operation.
//! * **Attributed records (`store::Attributed`)**: The trait a host row implements to expose its attribute column as text.
//! * **Tables (`store::Table`)**: An in-memory row store with generated UUID primary keys that invokes the engine purely at the load/save boundary: parse on read, format on write.

pub mod attrs;
pub mod store;

pub use attrs::{AttrError, AttrMap, MergeOperand, Value};
pub use store::{Attributed, StoreError, Table};

/// Result type used throughout the Anexo library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Anexo library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured attribute-text errors from the attrs module
    #[error(transparent)]
    Attr(attrs::AttrError),

    /// Structured host-table errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Attr(_) => "attrs",
            Error::Store(_) => "store",
        }
    }

    /// Check if this error is a malformed-attribute-text parse failure.
    pub fn is_malformed_text(&self) -> bool {
        match self {
            Error::Attr(attr_err) => attr_err.is_malformed_text(),
            _ => false,
        }
    }

    /// Check if this error indicates a record was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is related to row (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_serialization_error(),
            _ => false,
        }
    }
}
