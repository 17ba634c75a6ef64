//! The fixed set of names every fresh [`Context`](crate::Context) starts with.

use std::f64::consts;

use crate::context::NativeFn;

/// Built-in constants.
pub const CONSTANTS: &[(&str, f64)] = &[("PI", consts::PI), ("e", consts::E)];

/// Built-in single-argument functions. `log` is the natural logarithm.
pub const NATIVE_FUNCTIONS: &[(&str, NativeFn)] = &[
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("abs", f64::abs),
    ("sqrt", f64::sqrt),
    ("log", f64::ln),
    ("log10", f64::log10),
];
