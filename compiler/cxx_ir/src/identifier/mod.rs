//! Validated C++ identifiers.
//!
//! The identifier grammar is exactly `[_a-zA-Z][_a-zA-Z0-9]*`: ASCII only,
//! no locale sensitivity, no universal-character-names. The lexer uses the
//! same character classes to find the maximal identifier prefix.

use std::fmt;
use std::str::FromStr;

use cxx_diagnostic::{Error, Result};

/// Byte can start an identifier: `_` or an ASCII letter.
#[inline]
pub fn is_identifier_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Byte can continue an identifier: `_`, an ASCII letter or digit.
#[inline]
pub fn is_identifier_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Length in bytes of the longest identifier at the start of `text`.
///
/// Returns 0 when `text` does not start with an identifier. Every byte of a
/// match is ASCII, so the result is also the length in characters.
pub fn identifier_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(&first) if is_identifier_start(first) => {
            1 + bytes[1..]
                .iter()
                .take_while(|&&b| is_identifier_continue(b))
                .count()
        }
        _ => 0,
    }
}

/// An identifier whose text has been checked against the identifier grammar.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Identifier(String);

#[allow(
    clippy::len_without_is_empty,
    reason = "an identifier always has at least one character"
)]
impl Identifier {
    /// Validate `text` and wrap it.
    ///
    /// Fails with [`Error::InvalidIdentifier`] unless the whole text matches
    /// `[_a-zA-Z][_a-zA-Z0-9]*`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !text.is_empty() && identifier_prefix_len(&text) == text.len() {
            Ok(Identifier(text))
        } else {
            Err(Error::InvalidIdentifier { text })
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (identifiers are ASCII, so also the byte count).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Identifier::new(text)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Identifier::new(text)
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Identifier::new(text)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
