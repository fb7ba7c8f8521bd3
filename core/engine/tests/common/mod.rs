//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the engine integration tests.

#![allow(dead_code)]

use mathexpr_engine::{MathParser, ParseError, ParserConfig};

/// Parser with `pow`, `max`, `min` and x=1, y=2, z=3 behind `{ }` marks.
pub fn sample_parser() -> MathParser {
    let config = ParserConfig::new()
        .with_function("pow", 2, |args| args[0].powf(args[1]))
        .with_function("max", 2, |args| args[0].max(args[1]))
        .with_function("min", 2, |args| args[0].min(args[1]))
        .with_variable("x", 1.0)
        .with_variable("y", 2.0)
        .with_variable("z", 3.0)
        .with_delimiters("{", "}");
    MathParser::new(config).expect("valid marks")
}

/// Parser with the built-in library and default `[ ]` marks.
pub fn builtin_parser() -> MathParser {
    MathParser::new(ParserConfig::new().with_builtins()).expect("valid marks")
}

pub fn codes(errors: &[ParseError]) -> Vec<u16> {
    errors.iter().map(ParseError::code).collect()
}

pub const SAMPLE: &str = "pow({y}, 3) * (max({x}, 2) + pow(min({z}, 5), {y})) + 12.5 + (5 ^ 2)";
