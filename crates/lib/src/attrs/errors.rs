//! Error types for attribute-map operations.
//!
//! Parsing is the only fallible attribute operation: lookups, merges and
//! removals are total over well-formed maps, and benign cases (absent keys,
//! removing a key that is not there) are expressed through `Option`/`bool`
//! rather than errors.

use thiserror::Error;

/// Number of characters of input quoted back in a parse error.
const FRAGMENT_PREVIEW_CHARS: usize = 20;

/// Structured error type for attribute-text parsing.
///
/// The single variant carries the offending fragment and its byte offset so
/// the host can point at the corrupt column content. Callers must propagate
/// it unmodified; silently substituting an empty map would corrupt the
/// record's attribute set.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttrError {
    /// Input did not match the `key=>value` attribute grammar
    #[error("malformed attribute text at byte {offset} near '{fragment}': {reason}")]
    MalformedText {
        fragment: String,
        offset: usize,
        reason: String,
    },
}

impl AttrError {
    /// Builds a malformed-text error pointing at `offset` within `input`.
    ///
    /// `offset` must lie on a character boundary of `input`.
    pub(crate) fn malformed(input: &str, offset: usize, reason: impl Into<String>) -> Self {
        let fragment: String = input[offset..].chars().take(FRAGMENT_PREVIEW_CHARS).collect();
        AttrError::MalformedText {
            fragment,
            offset,
            reason: reason.into(),
        }
    }

    /// Check if this error is a malformed-text parse failure
    pub fn is_malformed_text(&self) -> bool {
        matches!(self, AttrError::MalformedText { .. })
    }

    /// Byte offset into the parsed input at which the error was detected
    pub fn offset(&self) -> usize {
        match self {
            AttrError::MalformedText { offset, .. } => *offset,
        }
    }

    /// Preview of the input starting at the offending offset
    pub fn fragment(&self) -> &str {
        match self {
            AttrError::MalformedText { fragment, .. } => fragment,
        }
    }
}

// Conversion from AttrError to the main Error type
impl From<AttrError> for crate::Error {
    fn from(err: AttrError) -> Self {
        crate::Error::Attr(err)
    }
}
