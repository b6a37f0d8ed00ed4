//! C++ IR - Tokens and Grammar Nodes
//!
//! This crate contains the core data structures shared by the lexer, parser
//! and mangler:
//! - [`Tag`] and [`Token`] for lexer output
//! - [`Identifier`] and the identifier character classes
//! - Name nodes (`NestedNameSpecifier`, `UnqualifiedId`, `QualifiedId`, `IdExpression`)
//! - Specifier nodes (`SimpleTypeSpecifier` up to `DeclarationSpecifierSequence`)
//! - Declarator nodes (`Declarator` down to `DeclaratorId`)
//!
//! # Design Philosophy
//!
//! Node types mirror the ISO C++ grammar productions they stand for. Every
//! "exactly one of" production is an enum, so an empty or doubly-populated
//! node cannot be built. Nodes are immutable once constructed; sequences are
//! only appended to while the parser is building them.
//!
//! All nodes render back to canonical source text through `Display`.

mod declarator;
mod identifier;
mod name;
mod specifier;
mod token;

pub use declarator::{
    Declarator, DeclaratorId, NoptrDeclarator, ParameterDeclarationClause,
    ParametersAndQualifiers, PtrDeclarator,
};
pub use identifier::{
    identifier_prefix_len, is_identifier_continue, is_identifier_start, Identifier,
};
pub use name::{IdExpression, NestedNameSpecifier, QualifiedId, UnqualifiedId};
pub use specifier::{
    DeclarationSpecifier, DeclarationSpecifierSequence, DefiningTypeSpecifier,
    SimpleTypeSpecifier, TypeSpecifier,
};
pub use token::{Tag, Token};
