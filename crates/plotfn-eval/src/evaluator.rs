//! Tree-walking evaluation of parsed terms.

use plotfn_types::ast::Node;

use crate::context::Context;
use crate::error::EvalResult;

/// Something that evaluates to a number against a [`Context`].
pub trait Evaluate {
    fn evaluate(&self, context: &Context) -> EvalResult<f64>;
}

impl Evaluate for Node {
    /// Evaluate the tree. Names are resolved in `context` at the moment of
    /// evaluation; the tree itself holds no bindings.
    fn evaluate(&self, context: &Context) -> EvalResult<f64> {
        match self {
            Node::Literal(value) => Ok(*value),
            Node::VariableRef(name) => context.read_variable(name),
            Node::FunctionCall { name, argument } => {
                // The argument is evaluated before the callee is looked up.
                let x = argument.evaluate(context)?;
                context.call(name, x)
            }
            Node::BinaryOp { op, left, right } => {
                let l = left.evaluate(context)?;
                let r = right.evaluate(context)?;
                Ok(op.apply(l, r))
            }
            Node::Negate(operand) => Ok(-operand.evaluate(context)?),
        }
    }
}
