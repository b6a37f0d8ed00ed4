//! Token types for the lexer.
//!
//! A token is an immutable `(lexeme, tag)` pair. The tag space is open:
//! keyword and punctuator tags are assigned by whoever builds the language
//! catalog. Three values are reserved for the lexer itself.

use std::fmt;

/// Integer classification code of a token.
///
/// | Value | Meaning                                   |
/// |-------|-------------------------------------------|
/// | 0     | [`Tag::EOF`] (empty lexeme)               |
/// | 1     | [`Tag::UNKNOWN`] (one unrecognized char)  |
/// | 2     | [`Tag::ID`] (identifier, not a keyword)   |
/// | 3..   | assigned by the language catalog          |
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// End of stream.
    pub const EOF: Tag = Tag(0);
    /// A single character no table recognizes.
    pub const UNKNOWN: Tag = Tag(1);
    /// Generic identifier.
    pub const ID: Tag = Tag(2);

    /// Create from a raw catalog value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Tag(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` for `EOF`, `UNKNOWN` and `ID`.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 <= Self::ID.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tag::EOF => f.write_str("Tag::EOF"),
            Tag::UNKNOWN => f.write_str("Tag::UNKNOWN"),
            Tag::ID => f.write_str("Tag::ID"),
            Tag(raw) => write!(f, "Tag({raw})"),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lexeme together with its tag.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    lexeme: String,
    tag: Tag,
}

impl Token {
    #[inline]
    pub fn new(lexeme: impl Into<String>, tag: Tag) -> Self {
        Token {
            lexeme: lexeme.into(),
            tag,
        }
    }

    /// The end-of-stream token: empty lexeme, [`Tag::EOF`].
    #[inline]
    pub fn eof() -> Self {
        Token {
            lexeme: String::new(),
            tag: Tag::EOF,
        }
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.tag == Tag::EOF
    }

    #[inline]
    pub fn is_identifier(&self) -> bool {
        self.tag == Tag::ID
    }

    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

/// Renders the token the way diagnostics quote it.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str("end of input")
        } else {
            write!(f, "`{}`", self.lexeme)
        }
    }
}
