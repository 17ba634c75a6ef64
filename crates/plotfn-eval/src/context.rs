//! Name-resolution context for evaluating terms.

use std::collections::BTreeMap;

use plotfn_types::ast::Node;
use plotfn_types::ParseResult;

use crate::builtins::{CONSTANTS, NATIVE_FUNCTIONS};
use crate::error::{BindingKind, EvalError, EvalResult};
use crate::evaluator::Evaluate;

/// A built-in numeric function.
pub type NativeFn = fn(f64) -> f64;

/// A function defined by a parsed term and a single parameter name.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub parameter: String,
    pub body: Node,
}

impl UserFunction {
    /// Evaluate the body with the parameter bound to `x`.
    ///
    /// The body runs in a brand-new [`Context`] holding only the built-ins
    /// and the parameter. Nothing from the caller's context is visible, so
    /// a user function cannot refer to itself or to other user functions.
    pub fn invoke(&self, x: f64) -> EvalResult<f64> {
        let mut scope = Context::new();
        scope.define_variable(self.parameter.as_str(), x);
        self.body.evaluate(&scope)
    }
}

/// What a name is bound to.
#[derive(Debug, Clone)]
pub enum Binding {
    Constant(f64),
    Native(NativeFn),
    User(UserFunction),
}

impl Binding {
    pub fn kind(&self) -> BindingKind {
        match self {
            Binding::Constant(_) => BindingKind::Variable,
            Binding::Native(_) | Binding::User(_) => BindingKind::Function,
        }
    }
}

/// Flat mapping from name to [`Binding`].
///
/// There is one level only: defining a name that already exists replaces
/// the old binding.
#[derive(Debug, Clone)]
pub struct Context {
    bindings: BTreeMap<String, Binding>,
}

impl Context {
    /// Create a context holding the built-in constants and native functions.
    pub fn new() -> Self {
        let mut ctx = Self {
            bindings: BTreeMap::new(),
        };
        for &(name, value) in CONSTANTS {
            ctx.define_variable(name, value);
        }
        for &(name, function) in NATIVE_FUNCTIONS {
            ctx.define_native(name, function);
        }
        ctx
    }

    // ── Definitions ──────────────────────────────────────────────────────

    /// Parse `term` and bind it as a function of `parameter` under `name`.
    ///
    /// On a parse error the context is left unchanged.
    pub fn define_function(
        &mut self,
        name: impl Into<String>,
        parameter: impl Into<String>,
        term: &str,
    ) -> ParseResult<()> {
        let body = plotfn_parser::parse(term)?;
        let name = name.into();
        let parameter = parameter.into();
        log::debug!("defined {name}({parameter}) = {body}");
        self.bindings
            .insert(name, Binding::User(UserFunction { parameter, body }));
        Ok(())
    }

    /// Bind a native function under `name`.
    pub fn define_native(&mut self, name: impl Into<String>, function: NativeFn) {
        self.bindings.insert(name.into(), Binding::Native(function));
    }

    /// Bind a constant under `name`.
    pub fn define_variable(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), Binding::Constant(value));
    }

    // ── Lookups ──────────────────────────────────────────────────────────

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Read the value of a constant.
    pub fn read_variable(&self, name: &str) -> EvalResult<f64> {
        match self.bindings.get(name) {
            Some(Binding::Constant(value)) => Ok(*value),
            Some(_) => Err(EvalError::wrong_kind(name, BindingKind::Variable)),
            None => Err(EvalError::unbound(name, BindingKind::Variable)),
        }
    }

    /// Call a native or user function with `x`.
    pub fn call(&self, name: &str, x: f64) -> EvalResult<f64> {
        match self.bindings.get(name) {
            Some(Binding::Native(function)) => Ok(function(x)),
            Some(Binding::User(function)) => {
                log::trace!("calling {name}({} = {x})", function.parameter);
                function.invoke(x)
            }
            Some(Binding::Constant(_)) => Err(EvalError::wrong_kind(name, BindingKind::Function)),
            None => Err(EvalError::unbound(name, BindingKind::Function)),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
