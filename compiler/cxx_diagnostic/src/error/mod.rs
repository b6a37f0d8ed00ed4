//! The front-end error type.

use crate::ErrorCode;

/// Result alias used throughout the front-end.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classification shared by every [`Error`] variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input text does not conform to an expected pattern or grammar.
    Format,
    /// A component was asked to do something inconsistent with its state.
    InvalidOperation,
    /// An invalid value was passed across an API boundary.
    Argument,
}

impl ErrorKind {
    /// Human-readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Format => "format error",
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::Argument => "invalid argument",
        }
    }
}

/// Every failure the lexer, parser and mangler can raise.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("lexeme `{lexeme}` is already registered")]
    DuplicateLexeme { lexeme: String },

    #[error("lexeme `{lexeme}` is not registered")]
    UnknownLexeme { lexeme: String },

    #[error("cannot register an empty lexeme")]
    EmptyLexeme,

    #[error("tag {tag} is reserved and cannot be assigned to `{lexeme}`")]
    ReservedTag { lexeme: String, tag: u32 },

    #[error("invalid language catalog: {message}")]
    Catalog { message: String },

    #[error("`{text}` is not an identifier (expected [_a-zA-Z][_a-zA-Z0-9]*)")]
    InvalidIdentifier { text: String },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: String },

    #[error("not parsed entirely: unexpected `{lexeme}`")]
    TrailingInput { lexeme: String },

    #[error("declarator `{declarator}` has no parameter clause")]
    MissingParameterClause { declarator: String },

    #[error("cannot mangle `{name}`: only unqualified names are supported")]
    UnsupportedName { name: String },
}

impl Error {
    /// The failure kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DuplicateLexeme { .. } | Error::UnknownLexeme { .. } => {
                ErrorKind::InvalidOperation
            }
            Error::EmptyLexeme | Error::ReservedTag { .. } => ErrorKind::Argument,
            Error::Catalog { .. }
            | Error::InvalidIdentifier { .. }
            | Error::UnexpectedToken { .. }
            | Error::TrailingInput { .. }
            | Error::MissingParameterClause { .. }
            | Error::UnsupportedName { .. } => ErrorKind::Format,
        }
    }

    /// The stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::DuplicateLexeme { .. } => ErrorCode::E0001,
            Error::UnknownLexeme { .. } => ErrorCode::E0002,
            Error::EmptyLexeme => ErrorCode::E0003,
            Error::ReservedTag { .. } => ErrorCode::E0004,
            Error::Catalog { .. } => ErrorCode::E0005,
            Error::InvalidIdentifier { .. } => ErrorCode::E1001,
            Error::UnexpectedToken { .. } => ErrorCode::E1002,
            Error::TrailingInput { .. } => ErrorCode::E1003,
            Error::MissingParameterClause { .. } => ErrorCode::E2001,
            Error::UnsupportedName { .. } => ErrorCode::E2002,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::Format`.
    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidOperation`.
    pub fn is_invalid_operation(&self) -> bool {
        self.kind() == ErrorKind::InvalidOperation
    }

    /// Shorthand for `self.kind() == ErrorKind::Argument`.
    pub fn is_argument(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    /// Render as `error[E1002]: format error: expected ..., found ...`.
    pub fn report(&self) -> String {
        format!("error[{}]: {}: {self}", self.code(), self.kind().name())
    }
}
