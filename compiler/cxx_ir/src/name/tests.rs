use super::*;
use pretty_assertions::assert_eq;

fn ident(text: &str) -> Identifier {
    Identifier::new(text).unwrap()
}

#[test]
fn nested_name_specifier_keeps_order() {
    let mut nns = NestedNameSpecifier::new();
    assert!(nns.is_empty());
    nns.push(ident("outer"));
    nns.push(ident("inner"));
    assert_eq!(nns.len(), 2);
    assert_eq!(nns.segments(), &[ident("outer"), ident("inner")]);
    assert_eq!(nns.to_string(), "outer::inner::");
}

#[test]
fn nested_name_specifier_order_is_significant() {
    let ab: NestedNameSpecifier = [ident("a"), ident("b")].into_iter().collect();
    let ba: NestedNameSpecifier = [ident("b"), ident("a")].into_iter().collect();
    assert_ne!(ab, ba);
}

#[test]
fn empty_nested_name_specifier_renders_nothing() {
    assert_eq!(NestedNameSpecifier::new().to_string(), "");
}

#[test]
fn unqualified_id_expression() {
    let expr = IdExpression::from(UnqualifiedId::new(ident("foo")));
    assert!(expr.is_unqualified_id());
    assert!(!expr.is_qualified_id());
    assert_eq!(expr.as_unqualified_id().unwrap().identifier(), &ident("foo"));
    assert!(expr.as_qualified_id().is_none());
    assert_eq!(expr.identifier().as_str(), "foo");
    assert_eq!(expr.to_string(), "foo");
}

#[test]
fn qualified_id_expression() {
    let nns: NestedNameSpecifier = [ident("std"), ident("chrono")].into_iter().collect();
    let qualified = QualifiedId::new(nns.clone(), UnqualifiedId::new(ident("now")));
    let expr = IdExpression::from(qualified);

    assert!(expr.is_qualified_id());
    assert!(expr.as_unqualified_id().is_none());
    let id = expr.as_qualified_id().unwrap();
    assert_eq!(id.nested_name_specifier(), &nns);
    assert_eq!(id.unqualified_id().identifier().as_str(), "now");
    assert_eq!(expr.identifier().as_str(), "now");
    assert_eq!(expr.to_string(), "std::chrono::now");
}
