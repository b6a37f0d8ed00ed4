//! Name parsing.

use cxx_diagnostic::Result;
use cxx_ir::{IdExpression, NestedNameSpecifier, QualifiedId, UnqualifiedId};
use tracing::debug;

use crate::Parser;

impl Parser<'_> {
    /// Parse a `nested-name-specifier`: the maximal run of `identifier ::`
    /// segments, possibly empty.
    ///
    /// Needs `::` registered as a punctuator to ever produce a segment.
    pub fn parse_nested_name_specifier(&mut self) -> Result<NestedNameSpecifier> {
        let mut nested = NestedNameSpecifier::new();
        while self.check_ident() && self.next_is_punct("::") {
            nested.push(self.expect_ident()?);
            self.advance(); // ::
        }
        Ok(nested)
    }

    /// Parse an `id-expression`: `nested-name-specifier? identifier`.
    pub fn parse_id_expression(&mut self) -> Result<IdExpression> {
        debug!(at = %self.current(), "id-expression");
        let nested = self.parse_nested_name_specifier()?;
        let unqualified = UnqualifiedId::new(self.expect_ident()?);
        if nested.is_empty() {
            Ok(unqualified.into())
        } else {
            Ok(QualifiedId::new(nested, unqualified).into())
        }
    }
}
