//! Lexer for C++ declarator text.
//!
//! Three layers, leaves first:
//!
//! 1. [`TokenTable`]: lexeme → [`Tag`](cxx_ir::Tag) registry that also tracks
//!    the distinct lexeme lengths in descending order, for longest-match
//!    scanning.
//! 2. [`LanguageContext`]: the keyword and punctuator tables of one language
//!    standard. Immutable once built and safe to share across threads.
//! 3. [`Lexer`]: a cursor over one input string that produces tokens on
//!    demand and can look ahead without moving.
//!
//! The lexer never fails. Unrecognized characters come back as
//! [`Tag::UNKNOWN`](cxx_ir::Tag::UNKNOWN) tokens, and reading past the end
//! keeps returning [`Tag::EOF`](cxx_ir::Tag::EOF) tokens.

mod context;
mod lexer;
mod table;

pub use context::{LanguageContext, Standard};
pub use lexer::{is_whitespace, Lexer};
pub use table::TokenTable;
