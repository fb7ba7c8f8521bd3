//! FILENAME: core/engine/src/builtins.rs
//! PURPOSE: Optional library of standard math functions.
//! CONTEXT: Function names must consist of letters only, since the tokenizer
//! never puts digits into a function name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::NativeFn;

fn arg(args: &[f64], index: usize) -> f64 {
    args.get(index).copied().unwrap_or(f64::NAN)
}

fn unary(f: fn(f64) -> f64) -> (usize, NativeFn) {
    (1, Arc::new(move |args: &[f64]| f(arg(args, 0))))
}

fn binary(f: fn(f64, f64) -> f64) -> (usize, NativeFn) {
    (2, Arc::new(move |args: &[f64]| f(arg(args, 0), arg(args, 1))))
}

/// NaN in either argument gives NaN, unlike `f64::max`.
fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Name --> (arity, implementation).
pub fn builtins() -> HashMap<String, (usize, NativeFn)> {
    let table: [(&str, (usize, NativeFn)); 14] = [
        ("pow", binary(f64::powf)),
        ("max", binary(max)),
        ("min", binary(min)),
        ("abs", unary(f64::abs)),
        ("sqrt", unary(f64::sqrt)),
        ("exp", unary(f64::exp)),
        ("ln", unary(f64::ln)),
        ("lg", unary(f64::log10)),
        ("floor", unary(f64::floor)),
        ("ceil", unary(f64::ceil)),
        ("round", unary(f64::round)),
        ("sin", unary(f64::sin)),
        ("cos", unary(f64::cos)),
        ("tan", unary(f64::tan)),
    ];
    table
        .into_iter()
        .map(|(name, entry)| (name.to_string(), entry))
        .collect()
}
