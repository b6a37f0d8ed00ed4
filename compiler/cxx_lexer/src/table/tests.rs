use super::*;
use pretty_assertions::assert_eq;

const LT: Tag = Tag::new(10);
const SHL3: Tag = Tag::new(11);
const SCOPE: Tag = Tag::new(12);

// === Registration ===

#[test]
fn add_then_get() {
    let mut table = TokenTable::new();
    table.add_token("<", LT).unwrap();
    assert_eq!(table.get_tag("<").unwrap(), LT);
    assert!(table.has_token("<"));
    assert_eq!(table.count(), 1);
}

#[test]
fn duplicate_lexeme_is_invalid_operation() {
    let mut table = TokenTable::new();
    table.add_token("::", SCOPE).unwrap();
    let err = table.add_token("::", Tag::new(99)).unwrap_err();
    assert!(err.is_invalid_operation());
    assert_eq!(
        err,
        Error::DuplicateLexeme {
            lexeme: "::".into()
        }
    );
    // The first registration is untouched.
    assert_eq!(table.get_tag("::").unwrap(), SCOPE);
    assert_eq!(table.count(), 1);
}

#[test]
fn empty_lexeme_is_argument_error() {
    let mut table = TokenTable::new();
    let err = table.add_token("", LT).unwrap_err();
    assert!(err.is_argument());
    assert!(table.is_empty());
    assert!(table.lengths().is_empty());
}

#[test]
fn reserved_tags_are_rejected() {
    let mut table = TokenTable::new();
    for tag in [Tag::EOF, Tag::UNKNOWN, Tag::ID] {
        let err = table.add_token("x", tag).unwrap_err();
        assert!(err.is_argument());
    }
    assert!(table.is_empty());
}

// === Lookup ===

#[test]
fn get_tag_of_missing_lexeme_fails() {
    let table = TokenTable::new();
    let err = table.get_tag("while").unwrap_err();
    assert!(err.is_invalid_operation());
    assert_eq!(
        err,
        Error::UnknownLexeme {
            lexeme: "while".into()
        }
    );
}

#[test]
fn has_token_never_fails() {
    let table = TokenTable::from_entries([("+", LT)]).unwrap();
    assert!(table.has_token("+"));
    assert!(!table.has_token("-"));
    assert!(!table.has_token(""));
}

#[test]
fn lookup_is_option() {
    let table = TokenTable::from_entries([("<<<", SHL3)]).unwrap();
    assert_eq!(table.lookup("<<<"), Some(SHL3));
    assert_eq!(table.lookup("<<"), None);
}

// === Lengths ===

#[test]
fn lengths_are_distinct_and_descending() {
    let table = TokenTable::from_entries([
        ("<", LT),
        ("<<<", SHL3),
        ("::", SCOPE),
        ("+", Tag::new(13)),
        ("...", Tag::new(14)),
    ])
    .unwrap();
    assert_eq!(table.lengths(), &[3, 2, 1]);
}

#[test]
fn lengths_do_not_depend_on_insertion_order() {
    let forward = TokenTable::from_entries([("<", LT), ("<<<", SHL3)]).unwrap();
    let backward = TokenTable::from_entries([("<<<", SHL3), ("<", LT)]).unwrap();
    assert_eq!(forward.lengths(), backward.lengths());
    assert_eq!(forward, backward);
}

#[test]
fn lengths_count_characters_not_bytes() {
    let table = TokenTable::from_entries([("→", Tag::new(20)), ("ab", Tag::new(21))]).unwrap();
    assert_eq!(table.lengths(), &[2, 1]);
}

#[test]
fn failed_registration_leaves_lengths_alone() {
    let mut table = TokenTable::from_entries([("<", LT)]).unwrap();
    assert!(table.add_token("<", SHL3).is_err());
    assert_eq!(table.lengths(), &[1]);
}

#[test]
fn iter_yields_every_entry() {
    let table = TokenTable::from_entries([("<", LT), ("::", SCOPE)]).unwrap();
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_unstable();
    assert_eq!(entries, vec![("::", SCOPE), ("<", LT)]);
}
