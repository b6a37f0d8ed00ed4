//! Declarator nodes.
//!
//! ```text
//! Declarator
//!   PtrDeclarator          (no pointer/reference operators in this subset)
//!     NoptrDeclarator
//!       DeclaratorId
//!         IdExpression
//!       ParametersAndQualifiers?
//!         ParameterDeclarationClause
//! ```

use std::fmt;

use crate::{IdExpression, Identifier, UnqualifiedId};

/// `parameter-declaration-clause`. Only the empty list, optionally followed
/// by an ellipsis, is representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterDeclarationClause {
    ellipsis: bool,
}

impl ParameterDeclarationClause {
    /// `()`
    pub fn empty() -> Self {
        ParameterDeclarationClause { ellipsis: false }
    }

    /// `(...)`
    pub fn variadic() -> Self {
        ParameterDeclarationClause { ellipsis: true }
    }

    pub fn has_ellipsis(&self) -> bool {
        self.ellipsis
    }
}

impl fmt::Display for ParameterDeclarationClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ellipsis {
            f.write_str("...")
        } else {
            Ok(())
        }
    }
}

/// `parameters-and-qualifiers`: the parenthesized parameter clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametersAndQualifiers {
    clause: ParameterDeclarationClause,
}

impl ParametersAndQualifiers {
    pub fn new(clause: ParameterDeclarationClause) -> Self {
        ParametersAndQualifiers { clause }
    }

    pub fn parameter_declaration_clause(&self) -> &ParameterDeclarationClause {
        &self.clause
    }
}

impl fmt::Display for ParametersAndQualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.clause)
    }
}

/// `declarator-id`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclaratorId(IdExpression);

impl DeclaratorId {
    pub fn new(id: IdExpression) -> Self {
        DeclaratorId(id)
    }

    pub fn id_expression(&self) -> &IdExpression {
        &self.0
    }
}

impl fmt::Display for DeclaratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `noptr-declarator`: a declarator-id with an optional parameter clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoptrDeclarator {
    id: DeclaratorId,
    parameters: Option<ParametersAndQualifiers>,
}

impl NoptrDeclarator {
    pub fn new(id: DeclaratorId, parameters: Option<ParametersAndQualifiers>) -> Self {
        NoptrDeclarator { id, parameters }
    }

    pub fn declarator_id(&self) -> &DeclaratorId {
        &self.id
    }

    pub fn parameters_and_qualifiers(&self) -> Option<&ParametersAndQualifiers> {
        self.parameters.as_ref()
    }

    pub fn has_parameters_and_qualifiers(&self) -> bool {
        self.parameters.is_some()
    }
}

impl fmt::Display for NoptrDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(parameters) = &self.parameters {
            write!(f, "{parameters}")?;
        }
        Ok(())
    }
}

/// `ptr-declarator`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PtrDeclarator(NoptrDeclarator);

impl PtrDeclarator {
    pub fn new(noptr: NoptrDeclarator) -> Self {
        PtrDeclarator(noptr)
    }

    pub fn noptr_declarator(&self) -> &NoptrDeclarator {
        &self.0
    }
}

impl fmt::Display for PtrDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `declarator`, the root of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declarator(PtrDeclarator);

impl Declarator {
    pub fn new(ptr: PtrDeclarator) -> Self {
        Declarator(ptr)
    }

    /// Build the whole chain for `identifier` with the given parameter clause.
    pub fn from_identifier(
        identifier: Identifier,
        parameters: Option<ParametersAndQualifiers>,
    ) -> Self {
        let id = DeclaratorId::new(UnqualifiedId::new(identifier).into());
        Declarator::new(PtrDeclarator::new(NoptrDeclarator::new(id, parameters)))
    }

    pub fn ptr_declarator(&self) -> &PtrDeclarator {
        &self.0
    }

    /// Shortcut through the (currently trivial) pointer layer.
    pub fn noptr_declarator(&self) -> &NoptrDeclarator {
        self.0.noptr_declarator()
    }

    pub fn declarator_id(&self) -> &DeclaratorId {
        self.noptr_declarator().declarator_id()
    }
}

impl fmt::Display for Declarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
