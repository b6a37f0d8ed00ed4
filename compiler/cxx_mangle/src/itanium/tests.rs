use super::*;
use cxx_ir::{
    DeclaratorId, NestedNameSpecifier, NoptrDeclarator, ParameterDeclarationClause, PtrDeclarator,
    QualifiedId, UnqualifiedId,
};
use pretty_assertions::assert_eq;

fn ident(text: &str) -> Identifier {
    Identifier::new(text).unwrap()
}

fn function(name: &str, clause: Option<ParameterDeclarationClause>) -> Declarator {
    Declarator::from_identifier(ident(name), clause.map(ParametersAndQualifiers::new))
}

fn functions() -> LanguageContext {
    LanguageContext::from_catalog_str(
        "[keywords]\nvoid = 10\n[punctuators]\n\"(\" = 20\n\")\" = 21\n\"...\" = 22\n\"::\" = 23\n",
    )
    .unwrap()
}

// === source-name ===

#[test]
fn source_name_is_length_then_text() {
    assert_eq!(source_name(&ident("foo")), "3foo");
    assert_eq!(source_name(&ident("_")), "1_");
    assert_eq!(source_name(&ident("a_rather_long_name")), "18a_rather_long_name");
}

// === mangle_declarator ===

#[test]
fn empty_parameter_list_is_v() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    let declarator = function("foo", Some(ParameterDeclarationClause::empty()));
    assert_eq!(mangler.mangle_declarator(&declarator).unwrap(), "_Z3foov");
}

#[test]
fn variadic_parameter_list_is_z() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    let declarator = function("foo", Some(ParameterDeclarationClause::variadic()));
    assert_eq!(mangler.mangle_declarator(&declarator).unwrap(), "_Z3fooz");
}

#[test]
fn declarator_without_clause_is_rejected() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    let err = mangler.mangle_declarator(&function("foo", None)).unwrap_err();
    assert!(err.is_format());
    assert_eq!(
        err,
        Error::MissingParameterClause {
            declarator: "foo".into()
        }
    );
}

#[test]
fn qualified_declarator_is_unsupported() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    let nested: NestedNameSpecifier = [ident("ns")].into_iter().collect();
    let id = DeclaratorId::new(QualifiedId::new(nested, UnqualifiedId::new(ident("f"))).into());
    let declarator = Declarator::new(PtrDeclarator::new(NoptrDeclarator::new(
        id,
        Some(ParametersAndQualifiers::default()),
    )));

    let err = mangler.mangle_declarator(&declarator).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedName {
            name: "ns::f".into()
        }
    );
}

// === mangle_function ===

#[test]
fn bare_name_mangles_as_no_parameter_function() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    assert_eq!(mangler.mangle_function("foo").unwrap(), "_Z3foov");
    assert_eq!(mangler.mangle_function("  foo\n").unwrap(), "_Z3foov");
}

#[test]
fn parameter_clauses_in_text() {
    let context = functions();
    let mangler = ItaniumMangler::new(&context);
    assert_eq!(mangler.mangle_function("foo()").unwrap(), "_Z3foov");
    assert_eq!(mangler.mangle_function("foo(void)").unwrap(), "_Z3foov");
    assert_eq!(mangler.mangle_function("foo(...)").unwrap(), "_Z3fooz");
}

#[test]
fn trailing_identifier_is_not_parsed_entirely() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    let err = mangler.mangle_function("foo bar").unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.to_string(), "not parsed entirely: unexpected `bar`");
}

#[test]
fn unregistered_parentheses_are_trailing_input() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    let err = mangler.mangle_function("foo()").unwrap_err();
    assert_eq!(
        err,
        Error::TrailingInput {
            lexeme: "(".into()
        }
    );
}

#[test]
fn non_identifier_name_fails_to_parse() {
    let context = LanguageContext::default();
    let mangler = ItaniumMangler::new(&context);
    for name in ["", "0foo", "é"] {
        let err = mangler.mangle_function(name).unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }), "{name:?}");
    }
}

#[test]
fn qualified_name_in_text_is_unsupported() {
    let context = functions();
    let mangler = ItaniumMangler::new(&context);
    let err = mangler.mangle_function("std::abort()").unwrap_err();
    assert_eq!(err.code().as_str(), "E2002");
}

// === demangle ===

#[test]
fn demangle_supported_symbols() {
    assert_eq!(demangle("_Z3foov").as_deref(), Some("foo()"));
    assert_eq!(demangle("_Z3barz").as_deref(), Some("bar(...)"));
    assert_eq!(demangle("_Z10abcdefghijv").as_deref(), Some("abcdefghij()"));
}

#[test]
fn demangle_rejects_everything_else() {
    for symbol in [
        "", "foo", "_Z", "_Zv", "_Z3foo", "_Z3fooi", "_Z4foov", "_Z2foov", "_Z03foov",
        "_ZN2ns3fooEv", "_Z1év",
    ] {
        assert_eq!(demangle(symbol), None, "{symbol:?}");
    }
}

#[test]
fn demangle_inverts_mangle_function() {
    let context = functions();
    let mangler = ItaniumMangler::new(&context);
    for name in ["main()", "printf(...)", "x()"] {
        let symbol = mangler.mangle_function(name).unwrap();
        assert_eq!(demangle(&symbol).as_deref(), Some(name));
    }
}
