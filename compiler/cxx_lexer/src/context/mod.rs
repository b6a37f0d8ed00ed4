//! Language contexts: the keyword and punctuator tables of one standard.
//!
//! Which lexemes exist in which C++ standard is data, not code. The built-in
//! contexts returned by [`LanguageContext::for_standard`] carry empty tables;
//! real catalogs are supplied by the caller, either as prebuilt
//! [`TokenTable`]s or as a TOML document:
//!
//! ```toml
//! [keywords]
//! int = 100
//! void = 101
//!
//! [punctuators]
//! "(" = 200
//! ")" = 201
//! "::" = 202
//! "..." = 203
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use cxx_diagnostic::{Error, Result};
use cxx_ir::Tag;
use serde::Deserialize;
use tracing::debug;

use crate::TokenTable;

/// ISO C++ standard revisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standard {
    Cxx98,
    Cxx03,
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
    Cxx23,
}

impl Standard {
    pub const ALL: [Standard; 7] = [
        Standard::Cxx98,
        Standard::Cxx03,
        Standard::Cxx11,
        Standard::Cxx14,
        Standard::Cxx17,
        Standard::Cxx20,
        Standard::Cxx23,
    ];

    /// The `-std=` spelling, e.g. `c++17`.
    pub fn name(self) -> &'static str {
        match self {
            Standard::Cxx98 => "c++98",
            Standard::Cxx03 => "c++03",
            Standard::Cxx11 => "c++11",
            Standard::Cxx14 => "c++14",
            Standard::Cxx17 => "c++17",
            Standard::Cxx20 => "c++20",
            Standard::Cxx23 => "c++23",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Standard {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Standard::ALL
            .into_iter()
            .find(|standard| standard.name().eq_ignore_ascii_case(text))
            .ok_or_else(|| Error::Catalog {
                message: format!("unknown language standard `{text}`"),
            })
    }
}

/// On-disk shape of a language catalog.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Catalog {
    #[serde(default)]
    keywords: BTreeMap<String, u32>,
    #[serde(default)]
    punctuators: BTreeMap<String, u32>,
}

/// Keyword and punctuator tables for one language standard.
///
/// Immutable after construction, so one context can back any number of
/// lexers, including lexers on other threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageContext {
    keywords: TokenTable,
    punctuators: TokenTable,
}

impl LanguageContext {
    pub fn new(keywords: TokenTable, punctuators: TokenTable) -> Self {
        LanguageContext {
            keywords,
            punctuators,
        }
    }

    /// The built-in context for `standard`.
    ///
    /// No lexicon ships with the front-end, so both tables are empty: every
    /// word lexes as an identifier and every symbol as an unknown character.
    pub fn for_standard(standard: Standard) -> Self {
        debug!(%standard, "using built-in (empty) language catalog");
        LanguageContext::default()
    }

    /// Load a context from a TOML catalog with `[keywords]` and
    /// `[punctuators]` tables mapping lexemes to tags.
    ///
    /// # Errors
    ///
    /// [`Error::Catalog`] for malformed TOML or unknown sections, plus any
    /// [`TokenTable::add_token`] error for a rejected entry.
    pub fn from_catalog_str(text: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(text).map_err(|err| Error::Catalog {
            message: err.message().to_owned(),
        })?;

        let keywords = TokenTable::from_entries(
            catalog
                .keywords
                .into_iter()
                .map(|(lexeme, tag)| (lexeme, Tag::new(tag))),
        )?;
        let punctuators = TokenTable::from_entries(
            catalog
                .punctuators
                .into_iter()
                .map(|(lexeme, tag)| (lexeme, Tag::new(tag))),
        )?;

        debug!(
            keywords = keywords.count(),
            punctuators = punctuators.count(),
            "loaded language catalog"
        );
        Ok(LanguageContext::new(keywords, punctuators))
    }

    #[inline]
    pub fn keywords(&self) -> &TokenTable {
        &self.keywords
    }

    #[inline]
    pub fn punctuators(&self) -> &TokenTable {
        &self.punctuators
    }
}
