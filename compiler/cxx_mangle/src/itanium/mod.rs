//! Itanium mangling of function declarators.
//!
//! # Encoding
//!
//! | Declarator | Mangled Name |
//! |------------|--------------|
//! | `foo()`    | `_Z3foov`    |
//! | `foo`      | `_Z3foov`    |
//! | `bar(...)` | `_Z3barz`    |
//!
//! A name given to [`ItaniumMangler::mangle_function`] without a parameter
//! clause is a function taking no parameters. A caller-built [`Declarator`]
//! handed to [`ItaniumMangler::mangle_declarator`] must carry its clause.

use cxx_diagnostic::{Error, Result};
use cxx_ir::{Declarator, Identifier, ParametersAndQualifiers};
use cxx_lexer::{LanguageContext, Lexer};
use cxx_parse::Parser;
use tracing::debug;

/// Prefix of every Itanium mangled name.
pub const MANGLE_PREFIX: &str = "_Z";

/// `<bare-function-type>` of an empty parameter list.
const NO_PARAMETERS: &str = "v";

/// `<bare-function-type>` of a variadic-only parameter list.
const ELLIPSIS: &str = "z";

/// `<source-name>`: the identifier's length in decimal, then its characters.
pub fn source_name(identifier: &Identifier) -> String {
    format!("{}{identifier}", identifier.len())
}

/// Mangles declarators using the keyword and punctuator tables of one
/// language context.
#[derive(Clone, Copy, Debug)]
pub struct ItaniumMangler<'ctx> {
    context: &'ctx LanguageContext,
}

impl<'ctx> ItaniumMangler<'ctx> {
    pub fn new(context: &'ctx LanguageContext) -> Self {
        ItaniumMangler { context }
    }

    #[inline]
    pub fn context(&self) -> &'ctx LanguageContext {
        self.context
    }

    /// Parse `name` as a function declarator and mangle it.
    ///
    /// The whole of `name` must be one declarator; without a parameter
    /// clause it names a function with no parameters.
    ///
    /// # Errors
    ///
    /// - any parse error from the declarator
    /// - [`Error::TrailingInput`] if tokens follow the declarator
    /// - [`Error::UnsupportedName`] for a qualified name
    pub fn mangle_function(&self, name: &str) -> Result<String> {
        let mut parser = Parser::new(Lexer::new(self.context, name));
        let declarator = parser.parse_declarator()?;
        parser.expect_end()?;

        let parameters = declarator
            .noptr_declarator()
            .parameters_and_qualifiers()
            .copied()
            .unwrap_or_default();

        let mut symbol = String::from(MANGLE_PREFIX);
        symbol.push_str(&Self::mangle_function_name(&declarator)?);
        symbol.push_str(Self::bare_function_type(&parameters));
        debug!(name, %symbol, "mangled function");
        Ok(symbol)
    }

    /// Mangle an already-built function declarator.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingParameterClause`] if the declarator has no
    ///   parameters-and-qualifiers
    /// - [`Error::UnsupportedName`] for a qualified name
    pub fn mangle_declarator(&self, declarator: &Declarator) -> Result<String> {
        let mut symbol = String::from(MANGLE_PREFIX);
        symbol.push_str(&Self::mangle_function_name(declarator)?);
        symbol.push_str(Self::mangle_bare_function_type(declarator)?);
        debug!(%declarator, %symbol, "mangled declarator");
        Ok(symbol)
    }

    /// `<source-name>` of the declarator-id, which must be unqualified.
    fn mangle_function_name(declarator: &Declarator) -> Result<String> {
        let id = declarator.declarator_id().id_expression();
        let unqualified = id.as_unqualified_id().ok_or_else(|| Error::UnsupportedName {
            name: id.to_string(),
        })?;
        Ok(source_name(unqualified.identifier()))
    }

    fn mangle_bare_function_type(declarator: &Declarator) -> Result<&'static str> {
        declarator
            .noptr_declarator()
            .parameters_and_qualifiers()
            .map(Self::bare_function_type)
            .ok_or_else(|| Error::MissingParameterClause {
                declarator: declarator.to_string(),
            })
    }

    fn bare_function_type(parameters: &ParametersAndQualifiers) -> &'static str {
        if parameters.parameter_declaration_clause().has_ellipsis() {
            ELLIPSIS
        } else {
            NO_PARAMETERS
        }
    }
}

/// Decode a mangled name produced by [`ItaniumMangler`] back to declarator
/// text, e.g. `_Z3barz` to `bar(...)`.
///
/// Returns `None` for anything outside the supported encoding.
pub fn demangle(symbol: &str) -> Option<String> {
    let rest = symbol.strip_prefix(MANGLE_PREFIX)?;

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || rest.starts_with('0') {
        return None;
    }
    let len: usize = rest[..digits].parse().ok()?;
    let rest = &rest[digits..];

    let name = Identifier::new(rest.get(..len)?).ok()?;
    let parameters = match &rest[len..] {
        NO_PARAMETERS => "()",
        ELLIPSIS => "(...)",
        _ => return None,
    };
    Some(format!("{name}{parameters}"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
