//! Grammar Modules
//!
//! Each module extends `Parser` with the productions of one grammar area:
//!
//! - [`name`]: `nested-name-specifier` and `id-expression`
//! - [`specifier`]: `simple-type-specifier` and `decl-specifier-seq`
//! - [`declarator`]: `declarator` and its parameter clause
//!
//! Productions are plain recursive descent with one token of lookahead plus
//! [`Parser::peek`](crate::Parser::peek) where a production needs two. No
//! production backtracks.

mod declarator;
mod name;
mod specifier;
