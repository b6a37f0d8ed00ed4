//! Declarator parsing.

use cxx_diagnostic::Result;
use cxx_ir::{
    Declarator, DeclaratorId, NoptrDeclarator, ParameterDeclarationClause,
    ParametersAndQualifiers, PtrDeclarator,
};
use tracing::debug;

use crate::Parser;

impl Parser<'_> {
    /// Parse a `declarator`: a declarator-id, optionally followed by a
    /// parameter clause.
    ///
    /// Fails with a format error unless the current token is an identifier.
    /// Without a following `(` the result has no parameters-and-qualifiers.
    pub fn parse_declarator(&mut self) -> Result<Declarator> {
        debug!(at = %self.current(), "declarator");
        let id = DeclaratorId::new(self.parse_id_expression()?);
        let parameters = self.parse_parameters_and_qualifiers()?;
        let declarator = Declarator::new(PtrDeclarator::new(NoptrDeclarator::new(id, parameters)));
        debug!(%declarator, "parsed declarator");
        Ok(declarator)
    }

    /// Parse `( )`, `( void )` or `( ... )`. Returns `None`, consuming
    /// nothing, when the current token is not `(`.
    pub fn parse_parameters_and_qualifiers(&mut self) -> Result<Option<ParametersAndQualifiers>> {
        if !self.check_punct("(") {
            return Ok(None);
        }
        self.advance();

        let variadic = self.check_punct("...");
        if variadic || self.check_keyword("void") {
            self.advance();
        }
        self.expect_punct(")", "`)`")?;

        let clause = if variadic {
            ParameterDeclarationClause::variadic()
        } else {
            ParameterDeclarationClause::empty()
        };
        Ok(Some(ParametersAndQualifiers::new(clause)))
    }
}
