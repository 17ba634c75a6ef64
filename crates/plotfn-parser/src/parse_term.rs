//! Term parsing with a fixed operator precedence.
//!
//! Precedence (lowest → highest):
//! 1. `+`, `-`
//! 2. `*`, `/`
//! 3. unary `-`
//! 4. `^`
//! 5. numeral, identifier, call `name(arg)`
//! 6. `( ... )`
//!
//! Every binary level parses its right-hand side by recursing into the same
//! level, so all binary operators group to the right: `a - b - c` is
//! `a - (b - c)` and `a ^ b ^ c` is `a ^ (b ^ c)`.
//!
//! A call argument is parsed at the unary level, not as a full term, so
//! `sin(x+1)` is rejected and must be written `sin((x+1))`.

use plotfn_types::ast::{BinOp, Node};
use plotfn_types::{ParseError, ParseResult};

use crate::parser::Parser;

impl Parser {
    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `Addition = Factor [ ("+" | "-") Addition ]`
    pub(crate) fn parse_addition(&mut self) -> ParseResult<Node> {
        let left = self.parse_factor()?;
        match self.match_op(&[('+', BinOp::Add), ('-', BinOp::Sub)])? {
            Some(op) => {
                let right = self.parse_addition()?;
                Ok(Node::binary(op, left, right))
            }
            None => Ok(left),
        }
    }

    /// `Factor = Sign [ ("*" | "/") Factor ]`
    fn parse_factor(&mut self) -> ParseResult<Node> {
        let left = self.parse_sign()?;
        match self.match_op(&[('*', BinOp::Mul), ('/', BinOp::Div)])? {
            Some(op) => {
                let right = self.parse_factor()?;
                Ok(Node::binary(op, left, right))
            }
            None => Ok(left),
        }
    }

    /// `Sign = "-" Sign | Power`
    fn parse_sign(&mut self) -> ParseResult<Node> {
        if self.check_next('-') {
            self.demand('-')?;
            let operand = self.parse_sign()?;
            return Ok(Node::negate(operand));
        }
        self.parse_power()
    }

    /// `Power = Value [ "^" Power ]`
    fn parse_power(&mut self) -> ParseResult<Node> {
        let left = self.parse_value()?;
        match self.match_op(&[('^', BinOp::Pow)])? {
            Some(op) => {
                let right = self.parse_power()?;
                Ok(Node::binary(op, left, right))
            }
            None => Ok(left),
        }
    }

    /// If the next non-space character is one of `ops`, consume it and
    /// return the corresponding operator.
    fn match_op(&mut self, ops: &[(char, BinOp)]) -> ParseResult<Option<BinOp>> {
        for &(symbol, op) in ops {
            if self.check_next(symbol) {
                self.demand(symbol)?;
                return Ok(Some(op));
            }
        }
        Ok(None)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Values
    // ══════════════════════════════════════════════════════════════════════════

    /// `Value = Number | Identifier [ "(" Sign ")" ] | Paren`
    fn parse_value(&mut self) -> ParseResult<Node> {
        self.trim();
        match self.current() {
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some(c) if c.is_alphabetic() => self.parse_identifier(),
            _ => self.parse_paren(),
        }
    }

    /// `Number = Digit { Digit } [ "." { Digit } ]`
    ///
    /// No sign and no exponent; a leading `-` belongs to the unary level.
    fn parse_number(&mut self) -> ParseResult<Node> {
        let start = self.position();
        let mut literal = String::new();
        while let Some(d) = self.eat_if(|c| c.is_ascii_digit()) {
            literal.push(d);
        }
        if self.check_next('.') {
            self.demand('.')?;
            literal.push('.');
            while let Some(d) = self.eat_if(|c| c.is_ascii_digit()) {
                literal.push(d);
            }
        }
        literal
            .parse::<f64>()
            .map(Node::Literal)
            .map_err(|_| ParseError::new(format!("invalid number '{literal}'"), start))
    }

    /// `Identifier = Letter { Letter }`, optionally followed by a call argument.
    fn parse_identifier(&mut self) -> ParseResult<Node> {
        let mut name = String::new();
        while let Some(c) = self.eat_if(char::is_alphabetic) {
            name.push(c);
        }
        if self.check_next('(') {
            self.demand('(')?;
            let argument = self.parse_sign()?;
            self.demand(')')?;
            return Ok(Node::call(name, argument));
        }
        Ok(Node::VariableRef(name))
    }

    /// `Paren = "(" Addition ")"`
    fn parse_paren(&mut self) -> ParseResult<Node> {
        if self.check_next('(') {
            self.demand('(')?;
            let inner = self.parse_addition()?;
            self.demand(')')?;
            return Ok(inner);
        }
        self.trim();
        Err(self.error_here())
    }
}
