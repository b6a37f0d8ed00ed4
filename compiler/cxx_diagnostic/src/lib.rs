//! Error reporting for the C++ declarator front-end.
//!
//! Every failure in the lexer, parser and mangler is a variant of [`Error`].
//! Variants are grouped into three kinds ([`ErrorKind`]) and carry a stable
//! [`ErrorCode`] for searchability:
//!
//! - **Format**: input text does not match an expected pattern or grammar
//! - **Invalid operation**: a component was asked to do something its state
//!   does not allow (duplicate registration, lookup of a missing lexeme)
//! - **Argument**: a bad value was handed across an API boundary
//!
//! Errors are never recovered internally. They propagate with `?` up to the
//! caller of the top-level parse or mangle operation.

mod error;
mod error_code;

pub use error::{Error, ErrorKind, Result};
pub use error_code::ErrorCode;
