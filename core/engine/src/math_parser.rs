//! FILENAME: core/engine/src/math_parser.rs
//! PURPOSE: Runs the whole pipeline for one expression string.
//! CONTEXT: `MathParser` holds the checked configuration and never changes after
//! construction, so one instance can serve many threads. Every call to `parse`
//! returns a fresh `Parsed` value that owns the tokens, the RPN and the errors.
//!
//! PIPELINE: input --> canonical marks --> validate (gate) --> tokenize
//!           --> shunting-yard --> RPN --> { ast(), evaluate() }

use log::debug;
use parser::{
    build_ast, error_positions, to_rpn, tokenize, ConfigError, Node, ParseError, Token,
    ValidationReport, Validator, VariableMarks,
};
use serde::Serialize;

use crate::config::ParserConfig;
use crate::evaluator::Evaluator;

pub struct MathParser {
    config: ParserConfig,
    marks: VariableMarks,
    validator: Validator,
}

impl MathParser {
    /// Fails if the configured variable marks are empty, equal, or alphanumeric.
    pub fn new(config: ParserConfig) -> Result<Self, ConfigError> {
        let (open, close) = &config.delimiters;
        let marks = VariableMarks::new(open.clone(), close.clone())?;
        let validator = Validator::new(config.operators);
        Ok(MathParser {
            config,
            marks,
            validator,
        })
    }

    /// Rewrites the configured variable marks to `[` and `]`.
    pub fn canonicalize(&self, input: &str) -> String {
        self.marks.canonicalize(input)
    }

    pub fn validate(&self, input: &str) -> ValidationReport {
        self.validator.validate(&self.canonicalize(input))
    }

    /// Raw tokens, without validation.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        tokenize(&self.canonicalize(input), self.config.operators)
    }

    /// Validates and converts `input` to RPN. When validation fails (and is not
    /// skipped) the result carries only the validation errors.
    pub fn parse(&self, input: &str) -> Parsed<'_> {
        let source = self.canonicalize(input);
        let mut errors = Vec::new();

        if !self.config.skip_validation {
            let report = self.validator.validate(&source);
            if !report.is_valid() {
                debug!(
                    "validation of '{}' failed with {} error(s)",
                    source,
                    report.errors().len()
                );
                return Parsed {
                    config: &self.config,
                    source,
                    tokens: Vec::new(),
                    rpn: Vec::new(),
                    errors: report.into_errors(),
                };
            }
        }

        let tokens = tokenize(&source, self.config.operators);
        let rpn = to_rpn(&tokens, self.config.operators, &mut errors);
        debug!("'{}': {} tokens, {} RPN items", source, tokens.len(), rpn.len());

        Parsed {
            config: &self.config,
            source,
            tokens,
            rpn,
            errors,
        }
    }

    /// Parses and evaluates in one step.
    pub fn evaluate(&self, input: &str) -> Evaluation {
        let mut parsed = self.parse(input);
        let value = parsed.evaluate();
        Evaluation {
            value,
            errors: parsed.into_errors(),
        }
    }
}

impl std::fmt::Debug for MathParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MathParser")
            .field("config", &self.config)
            .finish()
    }
}

/// Result of one `parse` call.
#[derive(Debug, Clone)]
pub struct Parsed<'a> {
    config: &'a ParserConfig,
    source: String,
    tokens: Vec<Token>,
    rpn: Vec<Token>,
    errors: Vec<ParseError>,
}

impl<'a> Parsed<'a> {
    /// The input after mark canonicalization.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tokens as produced by the tokenizer, before conversion.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn rpn(&self) -> &[Token] {
        &self.rpn
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_positions(&self) -> Vec<usize> {
        error_positions(&self.errors)
    }

    /// Builds the tree from the RPN. Errors are appended on every call.
    pub fn ast(&mut self) -> Option<Node> {
        build_ast(&self.rpn, &self.config.arities, &mut self.errors)
    }

    /// Evaluates the RPN. Errors are appended on every call.
    pub fn evaluate(&mut self) -> f64 {
        Evaluator::new(self.config).evaluate(&self.rpn, &mut self.errors)
    }
}

/// Value and errors of a one-step evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub value: f64,
    pub errors: Vec<ParseError>,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
