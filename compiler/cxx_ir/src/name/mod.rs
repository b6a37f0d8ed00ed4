//! Name nodes: nested-name-specifier, unqualified-id, qualified-id, id-expression.

use std::fmt;

use crate::Identifier;

/// The `a::b::` prefix of a qualified name.
///
/// Segments are ordered outermost first. An empty specifier is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedNameSpecifier {
    segments: Vec<Identifier>,
}

impl NestedNameSpecifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next (inner) `name::` segment.
    pub fn push(&mut self, segment: Identifier) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Identifier] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.segments.iter()
    }
}

impl FromIterator<Identifier> for NestedNameSpecifier {
    fn from_iter<I: IntoIterator<Item = Identifier>>(iter: I) -> Self {
        NestedNameSpecifier {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NestedNameSpecifier {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for NestedNameSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}::")?;
        }
        Ok(())
    }
}

/// An unqualified name. Only the identifier form exists in this subset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnqualifiedId(Identifier);

impl UnqualifiedId {
    pub fn new(identifier: Identifier) -> Self {
        UnqualifiedId(identifier)
    }

    pub fn identifier(&self) -> &Identifier {
        &self.0
    }
}

impl From<Identifier> for UnqualifiedId {
    fn from(identifier: Identifier) -> Self {
        UnqualifiedId(identifier)
    }
}

impl fmt::Display for UnqualifiedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `nested-name-specifier unqualified-id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedId {
    nested: NestedNameSpecifier,
    unqualified: UnqualifiedId,
}

impl QualifiedId {
    pub fn new(nested: NestedNameSpecifier, unqualified: UnqualifiedId) -> Self {
        QualifiedId {
            nested,
            unqualified,
        }
    }

    pub fn nested_name_specifier(&self) -> &NestedNameSpecifier {
        &self.nested
    }

    pub fn unqualified_id(&self) -> &UnqualifiedId {
        &self.unqualified
    }
}

impl fmt::Display for QualifiedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.nested, self.unqualified)
    }
}

/// Exactly one of an unqualified or a qualified id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdExpression {
    Unqualified(UnqualifiedId),
    Qualified(QualifiedId),
}

impl IdExpression {
    pub fn is_unqualified_id(&self) -> bool {
        matches!(self, IdExpression::Unqualified(_))
    }

    pub fn is_qualified_id(&self) -> bool {
        matches!(self, IdExpression::Qualified(_))
    }

    pub fn as_unqualified_id(&self) -> Option<&UnqualifiedId> {
        match self {
            IdExpression::Unqualified(id) => Some(id),
            IdExpression::Qualified(_) => None,
        }
    }

    pub fn as_qualified_id(&self) -> Option<&QualifiedId> {
        match self {
            IdExpression::Qualified(id) => Some(id),
            IdExpression::Unqualified(_) => None,
        }
    }

    /// The innermost identifier, whichever form this is.
    pub fn identifier(&self) -> &Identifier {
        match self {
            IdExpression::Unqualified(id) => id.identifier(),
            IdExpression::Qualified(id) => id.unqualified_id().identifier(),
        }
    }
}

impl From<UnqualifiedId> for IdExpression {
    fn from(id: UnqualifiedId) -> Self {
        IdExpression::Unqualified(id)
    }
}

impl From<QualifiedId> for IdExpression {
    fn from(id: QualifiedId) -> Self {
        IdExpression::Qualified(id)
    }
}

impl fmt::Display for IdExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdExpression::Unqualified(id) => fmt::Display::fmt(id, f),
            IdExpression::Qualified(id) => fmt::Display::fmt(id, f),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
