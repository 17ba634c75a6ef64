//! plotfn evaluator.
//!
//! Binds names to constants and functions, evaluates parsed terms against
//! those bindings, and samples a single-variable function across a range.
//!
//! ```text
//! term text → Parser → Node → Context::define_function → Context::call(name, x)
//! ```

mod builtins;
mod context;
mod error;
mod evaluator;
mod sampler;

pub use builtins::{CONSTANTS, NATIVE_FUNCTIONS};
pub use context::{Binding, Context, NativeFn, UserFunction};
pub use error::{BindingKind, EvalError, EvalResult, PlotError};
pub use evaluator::Evaluate;
pub use sampler::{plot_term, sample, Sample, SampleRange, DEFAULT_FUNCTION, DEFAULT_PARAMETER};
