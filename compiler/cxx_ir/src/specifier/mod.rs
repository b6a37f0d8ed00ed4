//! Declaration specifier nodes.
//!
//! The layering `DeclarationSpecifier -> DefiningTypeSpecifier ->
//! TypeSpecifier -> SimpleTypeSpecifier` follows the grammar's productions.
//! Each wrapper currently has a single alternative; they stay enums so new
//! alternatives (cv-qualifiers, storage classes, elaborated types) slot in
//! without changing the shape of consumers.

use std::fmt;

use crate::{Identifier, NestedNameSpecifier};

/// `simple-type-specifier`: a builtin type keyword or a (qualified) type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimpleTypeSpecifier {
    Int,
    Float,
    Bool,
    Char,
    WcharT,
    Short,
    Long,
    Signed,
    Unsigned,
    Double,
    /// `type-name`
    Identifier(Identifier),
    /// `nested-name-specifier type-name`
    QualifiedIdentifier(NestedNameSpecifier, Identifier),
}

impl SimpleTypeSpecifier {
    /// Keywords that name a builtin simple type specifier.
    pub const BUILTIN_KEYWORDS: [&'static str; 10] = [
        "int", "float", "bool", "char", "wchar_t", "short", "long", "signed", "unsigned", "double",
    ];

    /// Look up the builtin specifier spelled `keyword`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "char" => Some(Self::Char),
            "wchar_t" => Some(Self::WcharT),
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            "signed" => Some(Self::Signed),
            "unsigned" => Some(Self::Unsigned),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// The keyword spelling of a builtin specifier; `None` for type names.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Int => Some("int"),
            Self::Float => Some("float"),
            Self::Bool => Some("bool"),
            Self::Char => Some("char"),
            Self::WcharT => Some("wchar_t"),
            Self::Short => Some("short"),
            Self::Long => Some("long"),
            Self::Signed => Some("signed"),
            Self::Unsigned => Some("unsigned"),
            Self::Double => Some("double"),
            Self::Identifier(_) | Self::QualifiedIdentifier(..) => None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.keyword().is_some()
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    pub fn is_qualified_identifier(&self) -> bool {
        matches!(self, Self::QualifiedIdentifier(..))
    }

    /// The type name of either name form.
    pub fn type_name(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(name) | Self::QualifiedIdentifier(_, name) => Some(name),
            _ => None,
        }
    }

    pub fn nested_name_specifier(&self) -> Option<&NestedNameSpecifier> {
        match self {
            Self::QualifiedIdentifier(nested, _) => Some(nested),
            _ => None,
        }
    }
}

impl fmt::Display for SimpleTypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::QualifiedIdentifier(nested, name) => write!(f, "{nested}{name}"),
            builtin => f.write_str(builtin.keyword().unwrap_or_default()),
        }
    }
}

/// `type-specifier`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeSpecifier {
    Simple(SimpleTypeSpecifier),
}

impl TypeSpecifier {
    pub fn simple_type_specifier(&self) -> &SimpleTypeSpecifier {
        match self {
            TypeSpecifier::Simple(simple) => simple,
        }
    }
}

impl From<SimpleTypeSpecifier> for TypeSpecifier {
    fn from(simple: SimpleTypeSpecifier) -> Self {
        TypeSpecifier::Simple(simple)
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.simple_type_specifier(), f)
    }
}

/// `defining-type-specifier`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefiningTypeSpecifier {
    Type(TypeSpecifier),
}

impl DefiningTypeSpecifier {
    pub fn type_specifier(&self) -> &TypeSpecifier {
        match self {
            DefiningTypeSpecifier::Type(ty) => ty,
        }
    }
}

impl From<TypeSpecifier> for DefiningTypeSpecifier {
    fn from(ty: TypeSpecifier) -> Self {
        DefiningTypeSpecifier::Type(ty)
    }
}

impl From<SimpleTypeSpecifier> for DefiningTypeSpecifier {
    fn from(simple: SimpleTypeSpecifier) -> Self {
        DefiningTypeSpecifier::Type(simple.into())
    }
}

impl fmt::Display for DefiningTypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.type_specifier(), f)
    }
}

/// `decl-specifier`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationSpecifier {
    DefiningType(DefiningTypeSpecifier),
}

impl DeclarationSpecifier {
    pub fn defining_type_specifier(&self) -> &DefiningTypeSpecifier {
        match self {
            DeclarationSpecifier::DefiningType(defining) => defining,
        }
    }

    /// Descend through the wrapper layers to the simple type specifier.
    pub fn simple_type_specifier(&self) -> &SimpleTypeSpecifier {
        self.defining_type_specifier()
            .type_specifier()
            .simple_type_specifier()
    }
}

impl From<DefiningTypeSpecifier> for DeclarationSpecifier {
    fn from(defining: DefiningTypeSpecifier) -> Self {
        DeclarationSpecifier::DefiningType(defining)
    }
}

impl From<SimpleTypeSpecifier> for DeclarationSpecifier {
    fn from(simple: SimpleTypeSpecifier) -> Self {
        DeclarationSpecifier::DefiningType(simple.into())
    }
}

impl fmt::Display for DeclarationSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.simple_type_specifier(), f)
    }
}

/// `decl-specifier-seq`: specifiers in source order, repeats allowed
/// (`long long`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationSpecifierSequence {
    specifiers: Vec<DeclarationSpecifier>,
}

impl DeclarationSpecifierSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, specifier: DeclarationSpecifier) {
        self.specifiers.push(specifier);
    }

    pub fn specifiers(&self) -> &[DeclarationSpecifier] {
        &self.specifiers
    }

    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeclarationSpecifier> {
        self.specifiers.iter()
    }
}

impl FromIterator<DeclarationSpecifier> for DeclarationSpecifierSequence {
    fn from_iter<I: IntoIterator<Item = DeclarationSpecifier>>(iter: I) -> Self {
        DeclarationSpecifierSequence {
            specifiers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DeclarationSpecifierSequence {
    type Item = &'a DeclarationSpecifier;
    type IntoIter = std::slice::Iter<'a, DeclarationSpecifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DeclarationSpecifierSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, specifier) in self.specifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{specifier}")?;
        }
        Ok(())
    }
}
