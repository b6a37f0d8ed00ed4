//! Lexeme → tag registry with longest-match length ordering.
//!
//! Alongside the map, the table keeps the set of distinct lexeme lengths
//! (in characters) sorted in strictly descending order. Scanning candidate
//! lengths in that order and taking the first registered match guarantees
//! longest-match-wins: `<<<` beats `<` whenever both are registered, no
//! matter which was added first.

use std::collections::hash_map::Entry;

use cxx_diagnostic::{Error, Result};
use cxx_ir::Tag;
use rustc_hash::FxHashMap;

/// Keyword or punctuator table for one language standard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: FxHashMap<String, Tag>,
    /// Distinct lexeme lengths in characters, strictly descending.
    lengths: Vec<usize>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(lexeme, tag)` pairs, failing on the first
    /// rejected entry.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Tag)>,
        S: Into<String>,
    {
        let mut table = TokenTable::new();
        for (lexeme, tag) in entries {
            table.add_token(lexeme, tag)?;
        }
        Ok(table)
    }

    /// Register `lexeme` under `tag`.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateLexeme`] if `lexeme` is already registered
    /// - [`Error::EmptyLexeme`] for `""` (it would match at every position)
    /// - [`Error::ReservedTag`] if `tag` is `EOF`, `UNKNOWN` or `ID`
    pub fn add_token(&mut self, lexeme: impl Into<String>, tag: Tag) -> Result<()> {
        let lexeme = lexeme.into();
        if lexeme.is_empty() {
            return Err(Error::EmptyLexeme);
        }
        if tag.is_reserved() {
            return Err(Error::ReservedTag {
                lexeme,
                tag: tag.raw(),
            });
        }

        let len = lexeme.chars().count();
        match self.entries.entry(lexeme) {
            Entry::Occupied(entry) => {
                return Err(Error::DuplicateLexeme {
                    lexeme: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(tag);
            }
        }

        if let Err(at) = self.lengths.binary_search_by(|probe| len.cmp(probe)) {
            self.lengths.insert(at, len);
        }
        Ok(())
    }

    /// The tag registered for `lexeme`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLexeme`] if `lexeme` is not registered.
    pub fn get_tag(&self, lexeme: &str) -> Result<Tag> {
        self.lookup(lexeme).ok_or_else(|| Error::UnknownLexeme {
            lexeme: lexeme.to_owned(),
        })
    }

    /// Non-failing form of [`get_tag`](Self::get_tag).
    #[inline]
    pub fn lookup(&self, lexeme: &str) -> Option<Tag> {
        self.entries.get(lexeme).copied()
    }

    #[inline]
    pub fn has_token(&self, lexeme: &str) -> bool {
        self.entries.contains_key(lexeme)
    }

    /// Distinct lexeme lengths (in characters), strictly descending.
    #[inline]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of registered lexemes.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Tag)> + '_ {
        self.entries.iter().map(|(lexeme, &tag)| (lexeme.as_str(), tag))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
