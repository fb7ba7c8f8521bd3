//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports the configuration, the evaluator and the `MathParser`
//! facade, plus the parser types callers need to read the results.

pub mod builtins;
pub mod config;
pub mod dates;
pub mod evaluator;
pub mod math_parser;

// Re-export commonly used types at the crate root
pub use builtins::builtins;
pub use config::{NativeFn, ParserConfig, Settings};
pub use evaluator::{apply_operator, Evaluator};
pub use math_parser::{Evaluation, MathParser, Parsed};
pub use parser::{
    error_positions, rpn_to_string, ConfigError, ErrorCode, Node, OperatorSet, ParseError, Token,
    TokenKind, ValidationReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parser() -> MathParser {
        let config = ParserConfig::new()
            .with_builtins()
            .with_variable("x", 1.0)
            .with_variable("y", 2.0)
            .with_variable("z", 3.0)
            .with_delimiters("{", "}");
        MathParser::new(config).unwrap()
    }

    #[test]
    fn it_evaluates_the_sample_expression() {
        let parser = sample_parser();
        let mut parsed =
            parser.parse("pow({y}, 3) * (max({x}, 2) + pow(min({z}, 5), {y})) + 12.5 + (5 ^ 2)");
        assert_eq!(
            rpn_to_string(parsed.rpn()),
            "y 3 pow x 2 max z 5 min y pow + * 12.5 + 5 2 ^ +"
        );
        assert_eq!(parsed.evaluate(), 125.5);
        assert!(parsed.is_valid());
    }

    #[test]
    fn it_rejects_bad_delimiters() {
        let config = ParserConfig::new().with_delimiters("x", "y");
        assert!(matches!(
            MathParser::new(config),
            Err(ConfigError::AlphanumericMark(_))
        ));
    }

    #[test]
    fn it_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathParser>();
    }
}
