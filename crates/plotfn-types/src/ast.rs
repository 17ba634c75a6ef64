//! Expression tree nodes for plotfn terms.
//!
//! A tree is built once by the parser and never mutated afterwards.
//! Children are boxed and owned exclusively by their parent.

use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Nodes
// ══════════════════════════════════════════════════════════════════════════════

/// One element of a parsed term.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal (`3`, `2.5`). The empty term parses to `Literal(NaN)`.
    Literal(f64),
    /// Reference to a constant (`x`, `PI`).
    VariableRef(String),
    /// Single-argument call (`sin(x)`).
    FunctionCall { name: String, argument: Box<Node> },
    /// `left op right`
    BinaryOp {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `-operand`
    Negate(Box<Node>),
}

impl Node {
    /// The sentinel produced for an empty term: evaluates to NaN everywhere.
    pub fn undefined() -> Self {
        Node::Literal(f64::NAN)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::VariableRef(name.into())
    }

    pub fn call(name: impl Into<String>, argument: Node) -> Self {
        Node::FunctionCall {
            name: name.into(),
            argument: Box::new(argument),
        }
    }

    pub fn binary(op: BinOp, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn negate(operand: Node) -> Self {
        Node::Negate(Box::new(operand))
    }
}

/// Renders a fully parenthesised term, so grouping chosen by the parser is
/// visible: `10 - 3 - 2` displays as `(10 - (3 - 2))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{value}"),
            Node::VariableRef(name) => write!(f, "{name}"),
            Node::FunctionCall { name, argument } => write!(f, "{name}({argument})"),
            Node::BinaryOp { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_str())
            }
            Node::Negate(operand) => write!(f, "-{operand}"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Returns the operator symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }

    /// Apply the operator to two evaluated operands.
    ///
    /// Division by exactly zero yields `f64::MAX` instead of an infinity, so
    /// a plotted graph jumps off-screen rather than poisoning later samples.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => {
                if right == 0.0 {
                    f64::MAX
                } else {
                    left / right
                }
            }
            BinOp::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
