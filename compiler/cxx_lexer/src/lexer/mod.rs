//! Stream lexer.
//!
//! Produces one [`Token`] per call from a source string, using the keyword
//! and punctuator tables of a [`LanguageContext`]. At each position:
//!
//! 1. skip whitespace (space, CR, LF, horizontal tab);
//! 2. an identifier prefix wins, tagged as a keyword when registered as one;
//! 3. otherwise try punctuators, longest registered length first;
//! 4. otherwise consume one character as [`Tag::UNKNOWN`];
//! 5. at end of input return an EOF token, as often as asked.
//!
//! Scanning is a pure function of the cursor, so lookahead is a scan from a
//! copy of the cursor rather than a save/restore of lexer state.

use std::iter;

use cxx_ir::{identifier_prefix_len, Tag, Token};
use tracing::trace;

use crate::LanguageContext;

/// Whitespace skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// The first `n` characters of `text`, or `None` if it is shorter.
fn take_chars(text: &str, n: usize) -> Option<&str> {
    let end = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(text.len()))
        .nth(n)?;
    Some(&text[..end])
}

/// Cursor over one source string.
///
/// Cheap to create: build one per parse. The context is only borrowed, so
/// any number of lexers may share it.
#[derive(Clone, Debug)]
pub struct Lexer<'ctx> {
    context: &'ctx LanguageContext,
    source: String,
    /// Source length in characters.
    char_len: usize,
    /// Byte offset of the cursor, always on a char boundary.
    pos: usize,
}

impl<'ctx> Lexer<'ctx> {
    pub fn new(context: &'ctx LanguageContext, source: impl Into<String>) -> Self {
        let source = source.into();
        Lexer {
            context,
            char_len: source.chars().count(),
            source,
            pos: 0,
        }
    }

    /// Replace the source and move the cursor back to the start.
    pub fn set_stream(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.char_len = self.source.chars().count();
        self.pos = 0;
    }

    /// Extract the next token and advance past it.
    ///
    /// Past the end of input this keeps returning fresh EOF tokens.
    pub fn get_token(&mut self) -> Token {
        let (token, next) = self.scan_at(self.pos);
        self.pos = next;
        trace!(
            lexeme = token.lexeme(),
            tag = token.tag().raw(),
            offset = self.pos,
            "token"
        );
        token
    }

    /// The `n`-th next token, without moving the cursor.
    ///
    /// `n` below 1 is treated as 1, so `look_ahead(1)` is the token the next
    /// [`get_token`](Self::get_token) returns.
    pub fn look_ahead(&self, n: usize) -> Token {
        let mut pos = self.pos;
        let mut token = Token::eof();
        for _ in 0..n.max(1) {
            (token, pos) = self.scan_at(pos);
        }
        token
    }

    /// Source length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.char_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Byte offset of the cursor into the source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn context(&self) -> &'ctx LanguageContext {
        self.context
    }

    /// Scan one token starting at byte offset `start`, returning it with the
    /// offset just past it.
    fn scan_at(&self, start: usize) -> (Token, usize) {
        let rest = &self.source[start..];
        let text = rest.trim_start_matches(is_whitespace);
        let pos = start + (rest.len() - text.len());

        let ident_len = identifier_prefix_len(text);
        if ident_len > 0 {
            let lexeme = &text[..ident_len];
            let tag = self.context.keywords().lookup(lexeme).unwrap_or(Tag::ID);
            return (Token::new(lexeme, tag), pos + ident_len);
        }

        let punctuators = self.context.punctuators();
        for &len in punctuators.lengths() {
            let Some(candidate) = take_chars(text, len) else {
                continue;
            };
            if let Some(tag) = punctuators.lookup(candidate) {
                return (Token::new(candidate, tag), pos + candidate.len());
            }
        }

        match text.chars().next() {
            Some(c) => (Token::new(c, Tag::UNKNOWN), pos + c.len_utf8()),
            None => (Token::eof(), pos),
        }
    }
}

/// Yields tokens up to, not including, end of input.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.get_token();
        (!token.is_eof()).then_some(token)
    }
}
