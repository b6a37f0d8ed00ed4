use cxx_diagnostic::Error;
use pretty_assertions::assert_eq;

use super::{catalog, empty, parser};

#[test]
fn nested_name_specifier_is_maximal_run() {
    let context = catalog();
    let mut parser = parser(&context, "a::b::c");
    let nested = parser.parse_nested_name_specifier().unwrap();
    let segments: Vec<_> = nested.iter().map(|segment| segment.as_str()).collect();
    assert_eq!(segments, vec!["a", "b"]);
    assert_eq!(parser.current().lexeme(), "c");
}

#[test]
fn nested_name_specifier_may_be_empty() {
    let context = catalog();
    let mut parser = parser(&context, "c");
    assert!(parser.parse_nested_name_specifier().unwrap().is_empty());
    assert_eq!(parser.current().lexeme(), "c");
}

#[test]
fn single_colon_does_not_qualify() {
    let context = catalog();
    let mut parser = parser(&context, "a:b");
    let id = parser.parse_id_expression().unwrap();
    assert!(id.is_unqualified_id());
    assert_eq!(parser.current().lexeme(), ":");
}

#[test]
fn unregistered_scope_operator_does_not_qualify() {
    let context = empty();
    let mut parser = parser(&context, "a::b");
    let id = parser.parse_id_expression().unwrap();
    assert_eq!(id.to_string(), "a");
    assert_eq!(parser.current().lexeme(), ":");
}

#[test]
fn qualified_id_expression() {
    let context = catalog();
    let id = parser(&context, "ns::inner::name")
        .parse_id_expression()
        .unwrap();
    assert!(id.is_qualified_id());
    assert_eq!(id.identifier().as_str(), "name");
    assert_eq!(id.to_string(), "ns::inner::name");
}

#[test]
fn dangling_scope_needs_identifier() {
    let context = catalog();
    let err = parser(&context, "ns:: (").parse_id_expression().unwrap_err();
    assert_eq!(
        err,
        Error::UnexpectedToken {
            expected: "identifier",
            found: "`(`".into(),
        }
    );
}
