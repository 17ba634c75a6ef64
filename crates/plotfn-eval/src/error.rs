//! Error types for evaluation and sampling.

use plotfn_types::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The category a name lookup asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Variable,
    Function,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => write!(f, "variable"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// Evaluation error: a name could not be resolved to the binding it needed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum EvalError {
    /// No binding exists under `name`.
    #[error("{kind} '{name}' is not defined")]
    UnboundName { name: String, kind: BindingKind },

    /// `name` is bound, but to a function where a variable was needed or
    /// the other way round.
    #[error("'{name}' is not a {expected}")]
    WrongKind { name: String, expected: BindingKind },
}

impl EvalError {
    pub fn unbound(name: impl Into<String>, kind: BindingKind) -> Self {
        Self::UnboundName {
            name: name.into(),
            kind,
        }
    }

    pub fn wrong_kind(name: impl Into<String>, expected: BindingKind) -> Self {
        Self::WrongKind {
            name: name.into(),
            expected,
        }
    }

    /// The name the failed lookup was for.
    pub fn name(&self) -> &str {
        match self {
            Self::UnboundName { name, .. } | Self::WrongKind { name, .. } => name,
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Anything that can stop a plot from being produced.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum PlotError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// `start > end`, or a bound is NaN or infinite.
    #[error("invalid sample range: {start} to {end}")]
    InvalidRange { start: f64, end: f64 },
}
