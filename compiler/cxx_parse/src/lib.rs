//! Recursive descent parser for C++ declarators.
//!
//! Builds `cxx_ir` grammar nodes from a [`Lexer`]. The parser holds exactly
//! one token of lookahead, the *current* token, fetched as soon as the lexer
//! is attached; further lookahead goes through [`Lexer::look_ahead`].
//!
//! Punctuators and keywords are recognised by lexeme *and* by the tag the
//! active [`LanguageContext`] registers for them. A construct whose
//! punctuators the context does not register simply never matches: with an
//! empty catalog a declarator is exactly one identifier.

mod grammar;

use cxx_diagnostic::{Error, Result};
use cxx_ir::{Declarator, Identifier, Token};
use cxx_lexer::{LanguageContext, Lexer};
use tracing::trace;

/// Parse `source` as a declarator and require that nothing follows it.
///
/// # Errors
///
/// Any parse error, or [`Error::TrailingInput`] if tokens remain.
pub fn parse_declarator(context: &LanguageContext, source: &str) -> Result<Declarator> {
    let mut parser = Parser::new(Lexer::new(context, source));
    let declarator = parser.parse_declarator()?;
    parser.expect_end()?;
    Ok(declarator)
}

/// Parser state: the lexer plus the cached current token.
pub struct Parser<'ctx> {
    lexer: Lexer<'ctx>,
    current: Token,
}

impl<'ctx> Parser<'ctx> {
    /// Attach to `lexer`, reading the first token immediately.
    pub fn new(mut lexer: Lexer<'ctx>) -> Self {
        let current = lexer.get_token();
        Parser { lexer, current }
    }

    /// The token under the cursor. Always valid; EOF at end of input.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The token after the current one, without consuming anything.
    #[inline]
    pub fn peek(&self) -> Token {
        self.lexer.look_ahead(1)
    }

    /// Consume the current token, refill from the lexer and return the
    /// consumed token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.get_token();
        trace!(
            consumed = self.current.lexeme(),
            next = next.lexeme(),
            "advance"
        );
        std::mem::replace(&mut self.current, next)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Fail with [`Error::TrailingInput`] unless the current token is EOF.
    pub fn expect_end(&self) -> Result<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(Error::TrailingInput {
                lexeme: self.current.lexeme().to_owned(),
            })
        }
    }

    #[inline]
    pub fn context(&self) -> &'ctx LanguageContext {
        self.lexer.context()
    }

    /// Give the lexer back, positioned after the current token.
    pub fn into_lexer(self) -> Lexer<'ctx> {
        self.lexer
    }

    // Token classification

    /// `token` is the registered punctuator `lexeme`.
    fn is_punct(&self, token: &Token, lexeme: &str) -> bool {
        token.lexeme() == lexeme && self.context().punctuators().lookup(lexeme) == Some(token.tag())
    }

    /// `token` is the registered keyword `lexeme`.
    fn is_keyword(&self, token: &Token, lexeme: &str) -> bool {
        token.lexeme() == lexeme && self.context().keywords().lookup(lexeme) == Some(token.tag())
    }

    #[inline]
    fn check_punct(&self, lexeme: &str) -> bool {
        self.is_punct(&self.current, lexeme)
    }

    #[inline]
    fn check_keyword(&self, lexeme: &str) -> bool {
        self.is_keyword(&self.current, lexeme)
    }

    #[inline]
    fn check_ident(&self) -> bool {
        self.current.is_identifier()
    }

    fn next_is_punct(&self, lexeme: &str) -> bool {
        self.is_punct(&self.peek(), lexeme)
    }

    // Consumption

    fn unexpected(&self, expected: &'static str) -> Error {
        Error::UnexpectedToken {
            expected,
            found: self.current.to_string(),
        }
    }

    /// Consume the registered punctuator `lexeme`, or fail naming `expected`.
    fn expect_punct(&mut self, lexeme: &str, expected: &'static str) -> Result<()> {
        if self.check_punct(lexeme) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_ident(&mut self) -> Result<Identifier> {
        if !self.check_ident() {
            return Err(self.unexpected("identifier"));
        }
        Identifier::new(self.advance().into_lexeme())
    }
}

#[cfg(test)]
mod tests;
