//! Host-table integration tests
//!
//! This module tests the store layer end to end: row CRUD, attribute loads
//! and saves through the storage boundary, queries by attribute value, and
//! merge/remove updates against differently shaped row types.
