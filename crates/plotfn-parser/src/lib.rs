//! plotfn parser: converts a term string into an expression tree.

mod parse_term;
mod parser;

pub use parser::Parser;

use plotfn_types::ast::Node;
use plotfn_types::ParseResult;

/// Parse a complete term.
pub fn parse(input: &str) -> ParseResult<Node> {
    Parser::new(input).parse()
}
