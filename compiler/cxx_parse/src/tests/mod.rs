//! Parser tests.
//!
//! - `declarator`: declarators, parameter clauses and end-of-input handling
//! - `name`: nested-name-specifiers and id-expressions
//! - `specifier`: simple type specifiers and decl-specifier-seqs

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

mod name;

use cxx_lexer::{LanguageContext, Lexer};

use crate::Parser;

/// Keywords and punctuators of a small C++ catalog.
const CATALOG: &str = r#"
[keywords]
bool = 100
char = 101
double = 102
float = 103
int = 104
long = 105
short = 106
signed = 107
unsigned = 108
void = 109
wchar_t = 110

[punctuators]
"(" = 200
")" = 201
"::" = 202
"..." = 203
":" = 204
","  = 205
"#;

fn catalog() -> LanguageContext {
    LanguageContext::from_catalog_str(CATALOG).expect("test catalog is valid")
}

fn empty() -> LanguageContext {
    LanguageContext::default()
}

fn parser<'ctx>(context: &'ctx LanguageContext, source: &str) -> Parser<'ctx> {
    Parser::new(Lexer::new(context, source))
}

#[test]
fn constructor_caches_first_token() {
    let context = empty();
    let parser = parser(&context, "  first second");
    assert_eq!(parser.current().lexeme(), "first");
    assert_eq!(parser.peek().lexeme(), "second");
    // Peeking does not move the parser.
    assert_eq!(parser.current().lexeme(), "first");
}

#[test]
fn advance_returns_consumed_token() {
    let context = empty();
    let mut parser = parser(&context, "a b");
    assert_eq!(parser.advance().lexeme(), "a");
    assert_eq!(parser.current().lexeme(), "b");
    assert_eq!(parser.advance().lexeme(), "b");
    assert!(parser.is_at_end());
    assert!(parser.advance().is_eof());
    assert!(parser.is_at_end());
}

#[test]
fn expect_end_reports_leftover_lexeme() {
    let context = empty();
    let parser = parser(&context, "rest");
    let err = parser.expect_end().unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.to_string(), "not parsed entirely: unexpected `rest`");
}

#[test]
fn into_lexer_continues_after_current_token() {
    let context = empty();
    let mut parser = parser(&context, "a b c");
    parser.advance();
    let mut lexer = parser.into_lexer();
    assert_eq!(lexer.get_token().lexeme(), "c");
}
