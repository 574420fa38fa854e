//! The canonical attribute text codec.
//!
//! Attribute maps travel to and from parent storage as text: a
//! comma-separated sequence of `key=>value` pairs in the style of Postgres
//! `hstore`. Both sides of a pair are either bare tokens or double-quoted
//! tokens:
//!
//! - Bare tokens may not contain `,`, `=`, `>` or `"`. Whitespace around them
//!   is trimmed; internal whitespace is kept (`talla => US 10`).
//! - Quoted tokens preserve everything between the quotes; a doubled `""`
//!   stands for one literal quote.
//! - In value position the bare token `NULL` (any ASCII case) is the null
//!   marker. A quoted `"NULL"` is ordinary text.
//!
//! Parsing is strict: unbalanced quotes, a missing `=>`, an empty key, a
//! missing value, trailing commas and stray characters are all reported as
//! [`AttrError::MalformedText`] with the byte offset of the offending input.
//!
//! Writing produces one canonical form: pairs sorted by key, joined with
//! `", "`, `=>` unspaced, and tokens quoted only when a bare rendering would
//! not read back as the same map.

use std::collections::BTreeMap;

use super::{AttrError, Value};

/// Characters that terminate a bare token.
const BARE_TERMINATORS: [char; 4] = [',', '=', '>', '"'];

/// A scanned key or value token.
struct Token {
    text: String,
    quoted: bool,
    offset: usize,
}

/// Character cursor over the input, tracking byte offsets for errors.
struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Scans one token. The cursor must sit on a non-whitespace character.
    fn read_token(&mut self) -> Result<Token, AttrError> {
        match self.peek() {
            Some('"') => self.read_quoted(),
            _ => Ok(self.read_bare()),
        }
    }

    fn read_quoted(&mut self) -> Result<Token, AttrError> {
        let start = self.offset;
        self.bump(); // opening quote
        let mut text = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(AttrError::malformed(
                        self.input,
                        start,
                        "unterminated quoted token",
                    ));
                }
                Some('"') => {
                    if self.peek() == Some('"') {
                        // Doubled quote: one literal quote character.
                        self.bump();
                        text.push('"');
                    } else {
                        break;
                    }
                }
                Some(c) => text.push(c),
            }
        }
        Ok(Token {
            text,
            quoted: true,
            offset: start,
        })
    }

    fn read_bare(&mut self) -> Token {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if BARE_TERMINATORS.contains(&c) {
                break;
            }
            self.bump();
        }
        Token {
            text: self.input[start..self.offset].trim().to_string(),
            quoted: false,
            offset: start,
        }
    }

    fn expect_arrow(&mut self) -> Result<(), AttrError> {
        if self.input[self.offset..].starts_with("=>") {
            self.offset += 2;
            Ok(())
        } else {
            Err(AttrError::malformed(
                self.input,
                self.offset,
                "expected '=>' after key",
            ))
        }
    }
}

/// Parses attribute text into key/value entries.
///
/// Duplicate keys are resolved last-write-wins, matching the overwrite
/// semantics of a merge.
pub(crate) fn parse_entries(input: &str) -> Result<BTreeMap<String, Value>, AttrError> {
    let mut entries = BTreeMap::new();
    let mut cur = Cursor::new(input);

    cur.skip_whitespace();
    if cur.at_end() {
        return Ok(entries);
    }

    loop {
        let key = cur.read_token()?;
        if key.text.is_empty() {
            return Err(AttrError::malformed(input, key.offset, "empty key"));
        }

        cur.skip_whitespace();
        cur.expect_arrow()?;
        cur.skip_whitespace();

        let value = cur.read_token()?;
        if value.text.is_empty() && !value.quoted {
            return Err(AttrError::malformed(input, value.offset, "expected a value"));
        }
        let value = if !value.quoted && value.text.eq_ignore_ascii_case("NULL") {
            Value::Null
        } else {
            Value::Text(value.text)
        };
        entries.insert(key.text, value);

        cur.skip_whitespace();
        match cur.peek() {
            None => break,
            Some(',') => {
                cur.bump();
                cur.skip_whitespace();
                if cur.at_end() {
                    return Err(AttrError::malformed(
                        input,
                        cur.offset,
                        "dangling ',' with no pair after it",
                    ));
                }
            }
            Some(_) => {
                return Err(AttrError::malformed(
                    input,
                    cur.offset,
                    "unexpected characters after value",
                ));
            }
        }
    }

    Ok(entries)
}

/// Writes entries in the canonical text form.
pub(crate) fn write_entries(entries: &BTreeMap<String, Value>) -> String {
    let mut out = String::new();
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_token(&mut out, key, needs_quoting(key));
        out.push_str("=>");
        match value {
            Value::Null => out.push_str("NULL"),
            Value::Text(text) => {
                // A bare "NULL" would read back as the null marker.
                let quote = needs_quoting(text) || text.eq_ignore_ascii_case("NULL");
                push_token(&mut out, text, quote);
            }
        }
    }
    out
}

/// True when a bare rendering of `token` would not survive a round-trip.
fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token.contains(BARE_TERMINATORS)
        || token.starts_with(char::is_whitespace)
        || token.ends_with(char::is_whitespace)
}

fn push_token(out: &mut String, token: &str, quote: bool) {
    if !quote {
        out.push_str(token);
        return;
    }
    out.push('"');
    for c in token.chars() {
        if c == '"' {
            out.push_str("\"\"");
        } else {
            out.push(c);
        }
    }
    out.push('"');
}
