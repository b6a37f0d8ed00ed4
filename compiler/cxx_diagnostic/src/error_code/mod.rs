//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Token tables and language catalogs
/// - E1xxx: Identifier format and parser errors
/// - E2xxx: Mangling errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Table Errors (E0xxx)
    /// Lexeme already registered
    E0001,
    /// Lexeme not registered
    E0002,
    /// Empty lexeme
    E0003,
    /// Reserved tag
    E0004,
    /// Malformed language catalog
    E0005,

    // Parser Errors (E1xxx)
    /// Invalid identifier text
    E1001,
    /// Unexpected token
    E1002,
    /// Input not parsed entirely
    E1003,

    // Mangling Errors (E2xxx)
    /// Function declarator without a parameter clause
    E2001,
    /// Name form outside the supported mangling subset
    E2002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        // Tables
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        // Mangling
        ErrorCode::E2001,
        ErrorCode::E2002,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// Check if this is a token table / catalog error (E0xxx).
    pub fn is_table_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a mangling error (E2xxx).
    pub fn is_mangle_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "lexeme already registered",
            ErrorCode::E0002 => "lexeme not registered",
            ErrorCode::E0003 => "empty lexeme",
            ErrorCode::E0004 => "reserved tag",
            ErrorCode::E0005 => "malformed language catalog",
            ErrorCode::E1001 => "invalid identifier",
            ErrorCode::E1002 => "unexpected token",
            ErrorCode::E1003 => "input not parsed entirely",
            ErrorCode::E2001 => "missing parameter clause",
            ErrorCode::E2002 => "unsupported name form",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
