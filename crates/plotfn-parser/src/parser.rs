//! Core parser infrastructure: character cursor and error helpers.
//!
//! There is no token stream. Each grammar level peeks at the next
//! non-space character and consumes input directly.

use plotfn_types::ast::Node;
use plotfn_types::{ParseError, ParseResult};

/// The plotfn term parser.
///
/// Fails fast: the first malformed character aborts the parse.
pub struct Parser {
    /// The term as characters, so positions are character indices.
    chars: Vec<char>,
    /// Current index into `chars`. Only ever moves forward.
    pos: usize,
}

impl Parser {
    /// Create a parser over a term.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    // ── Character Cursor ──────────────────────────────────────────────────────

    /// Returns `true` while unconsumed characters remain.
    pub(crate) fn has_more(&self) -> bool {
        self.pos < self.chars.len()
    }

    /// Returns the current character without advancing.
    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Current cursor position.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Consume the current character if it satisfies `pred`.
    pub(crate) fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.current().filter(|&c| pred(c))?;
        self.pos += 1;
        Some(c)
    }

    /// Skip a run of space characters. Tabs and newlines are not skipped.
    pub(crate) fn trim(&mut self) {
        while self.current() == Some(' ') {
            self.pos += 1;
        }
    }

    /// Skip spaces, then check whether the next character is `c`.
    pub(crate) fn check_next(&mut self, c: char) -> bool {
        self.trim();
        self.current() == Some(c)
    }

    /// Consume exactly `c` or fail.
    pub(crate) fn demand(&mut self, c: char) -> ParseResult<()> {
        match self.current() {
            Some(found) if found == c => {
                self.pos += 1;
                Ok(())
            }
            found => Err(ParseError::expected(c, found, self.pos)),
        }
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Error for whatever sits under the cursor, or for running out of input.
    pub(crate) fn error_here(&self) -> ParseError {
        match self.current() {
            Some(c) => ParseError::unexpected_char(c, self.pos),
            None => ParseError::unexpected_end(self.pos),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the whole input into an expression tree.
    ///
    /// The empty string is not an error: it yields [`Node::undefined`].
    /// Any characters left over after a complete term are rejected.
    pub fn parse(mut self) -> ParseResult<Node> {
        if !self.has_more() {
            return Ok(Node::undefined());
        }

        let root = self.parse_addition()?;
        if let Some(c) = self.current() {
            return Err(ParseError::unexpected_char(c, self.pos));
        }

        log::trace!("parsed term as {root}");
        Ok(root)
    }
}
