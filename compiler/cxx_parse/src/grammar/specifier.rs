//! Declaration specifier parsing.

use cxx_diagnostic::Result;
use cxx_ir::{DeclarationSpecifierSequence, SimpleTypeSpecifier};
use tracing::debug;

use crate::Parser;

impl Parser<'_> {
    /// The builtin type the current token names, if it is a registered
    /// keyword spelling one.
    fn check_builtin_type(&self) -> Option<SimpleTypeSpecifier> {
        let lexeme = self.current().lexeme();
        SimpleTypeSpecifier::from_keyword(lexeme).filter(|_| self.check_keyword(lexeme))
    }

    /// Parse a `simple-type-specifier`: a builtin type keyword or an
    /// optionally qualified type name.
    pub fn parse_simple_type_specifier(&mut self) -> Result<SimpleTypeSpecifier> {
        debug!(at = %self.current(), "simple-type-specifier");
        if let Some(builtin) = self.check_builtin_type() {
            self.advance();
            return Ok(builtin);
        }
        if !self.check_ident() {
            return Err(self.unexpected("type specifier"));
        }

        let nested = self.parse_nested_name_specifier()?;
        let name = self.expect_ident()?;
        if nested.is_empty() {
            Ok(SimpleTypeSpecifier::Identifier(name))
        } else {
            Ok(SimpleTypeSpecifier::QualifiedIdentifier(nested, name))
        }
    }

    /// Parse a `decl-specifier-seq` of one or more specifiers.
    ///
    /// Builtin type keywords may repeat (`unsigned long`). A type name is
    /// only taken in first position, so in `T x` and `unsigned x` the `x`
    /// is left for the declarator.
    pub fn parse_decl_specifier_seq(&mut self) -> Result<DeclarationSpecifierSequence> {
        debug!(at = %self.current(), "decl-specifier-seq");
        let mut sequence = DeclarationSpecifierSequence::new();
        loop {
            let type_name = sequence.is_empty() && self.check_ident();
            if !type_name && self.check_builtin_type().is_none() {
                break;
            }
            sequence.push(self.parse_simple_type_specifier()?.into());
        }

        if sequence.is_empty() {
            return Err(self.unexpected("declaration specifier"));
        }
        Ok(sequence)
    }
}
