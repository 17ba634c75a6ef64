//! Shared types for plotfn.
//!
//! This crate defines the expression tree produced by the parser and the
//! parse error type, which are used by both the parser and the evaluator.

mod error;
pub mod ast;

pub use error::ParseError;

/// Result type used by the parser.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
