//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Computes the numeric value of an RPN sequence.
//! CONTEXT: Replays the converter output with a number stack, the same way the
//! AST builder replays it with a node stack. Unresolved pieces become NaN and an
//! error is recorded, so evaluation always yields a number.
//!
//! SUPPORTED FEATURES:
//! - Numbers, variables (from the configured map), dates (epoch milliseconds)
//! - Arithmetic set: + - * / ^ (power)
//! - Extended set: + - * / % ** (power), | ^ & (bitwise on 32-bit integers),
//!   << >> >>> (shifts), < > (1 or 0)
//! - Functions with configured arity and implementation

use log::warn;
use parser::{bounded_arity, ErrorCode, OperatorSet, ParseError, Token, TokenKind};

use crate::config::ParserConfig;
use crate::dates::date_to_millis;

/// ECMAScript ToUint32.
fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// ECMAScript ToInt32.
fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

fn from_bool(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Applies a binary operator of the given set. Unknown symbols give NaN.
pub fn apply_operator(operators: OperatorSet, symbol: &str, left: f64, right: f64) -> f64 {
    match (operators, symbol) {
        (_, "+") => left + right,
        (_, "-") => left - right,
        (_, "*") => left * right,
        (_, "/") => left / right,
        (OperatorSet::Arithmetic, "^") => left.powf(right),
        (OperatorSet::Extended, "**") => left.powf(right),
        (OperatorSet::Extended, "%") => left % right,
        (OperatorSet::Extended, "^") => (to_int32(left) ^ to_int32(right)) as f64,
        (OperatorSet::Extended, "|") => (to_int32(left) | to_int32(right)) as f64,
        (OperatorSet::Extended, "&") => (to_int32(left) & to_int32(right)) as f64,
        (OperatorSet::Extended, "<<") => {
            to_int32(left).wrapping_shl(to_uint32(right) & 31) as f64
        }
        (OperatorSet::Extended, ">>") => {
            to_int32(left).wrapping_shr(to_uint32(right) & 31) as f64
        }
        (OperatorSet::Extended, ">>>") => {
            to_uint32(left).wrapping_shr(to_uint32(right) & 31) as f64
        }
        (OperatorSet::Extended, "<") => from_bool(left < right),
        (OperatorSet::Extended, ">") => from_bool(left > right),
        _ => f64::NAN,
    }
}

/// The RPN evaluator. Borrows the configuration for the duration of a call.
pub struct Evaluator<'a> {
    config: &'a ParserConfig,
}

impl<'a> Evaluator<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Evaluator { config }
    }

    /// Evaluates `rpn`, appending any errors. An empty sequence yields NaN.
    pub fn evaluate(&self, rpn: &[Token], errors: &mut Vec<ParseError>) -> f64 {
        let mut stack: Vec<f64> = Vec::new();

        for token in rpn {
            match token.kind {
                TokenKind::Number => stack.push(token.text.parse().unwrap_or(f64::NAN)),
                TokenKind::Date => stack.push(self.eval_date(token, errors)),
                TokenKind::Variable => stack.push(self.eval_variable(token, errors)),
                TokenKind::Operator => {
                    let right = pop_operand(&mut stack, token);
                    let left = pop_operand(&mut stack, token);
                    stack.push(apply_operator(self.config.operators, &token.text, left, right));
                }
                TokenKind::FunctionName => {
                    let result = self.eval_function(token, &mut stack, errors);
                    stack.push(result);
                }
                TokenKind::FunctionArgumentSeparator
                | TokenKind::LeftParenthesis
                | TokenKind::RightParenthesis => {}
            }
        }

        let result = stack.pop().unwrap_or(f64::NAN);
        if !stack.is_empty() {
            errors.push(ParseError::unlocated(ErrorCode::UnusedItems));
        }
        result
    }

    fn eval_variable(&self, token: &Token, errors: &mut Vec<ParseError>) -> f64 {
        match self.config.variables.get(&token.text) {
            Some(&value) => value,
            None => {
                warn!("variable '{}' is not configured", token.text);
                errors.push(
                    ParseError::new(ErrorCode::UnknownVariable, token.text.clone(), None)
                        .with_message(format!("Variable with name \"{}\" not found", token.text)),
                );
                f64::NAN
            }
        }
    }

    fn eval_date(&self, token: &Token, errors: &mut Vec<ParseError>) -> f64 {
        date_to_millis(&token.text).unwrap_or_else(|| {
            warn!("date literal '{}' cannot be parsed", token.text);
            errors.push(ParseError::new(ErrorCode::InvalidDate, token.text.clone(), None));
            f64::NAN
        })
    }

    /// Pops the arguments (restoring call order) and calls the implementation.
    fn eval_function(&self, token: &Token, stack: &mut Vec<f64>, errors: &mut Vec<ParseError>) -> f64 {
        let name = &token.text;

        let arity = match self.config.arities.get(name) {
            Some(&arity) => bounded_arity(name, arity),
            None => {
                warn!("function '{}' has no configured arity", name);
                errors.push(
                    ParseError::new(ErrorCode::UnknownArity, name.clone(), None).with_message(
                        format!("Function with name \"{}\" has no configured arity", name),
                    ),
                );
                0
            }
        };

        let available = arity.min(stack.len());
        if available < arity {
            warn!("function '{}' expects {} arguments, {} available", name, arity, available);
        }
        // Missing leading arguments are NaN so implementations can index safely.
        let start = stack.len() - available;
        let mut args = vec![f64::NAN; arity - available];
        args.extend(stack.drain(start..));

        match self.config.functions.get(name) {
            Some(function) => function(&args),
            None => {
                warn!("function '{}' is not configured", name);
                errors.push(
                    ParseError::new(ErrorCode::UnknownFunction, name.clone(), None).with_message(
                        format!("Function with name \"{}\" not found", name),
                    ),
                );
                f64::NAN
            }
        }
    }
}

fn pop_operand(stack: &mut Vec<f64>, token: &Token) -> f64 {
    stack.pop().unwrap_or_else(|| {
        warn!("operator '{}' is missing an operand", token.text);
        f64::NAN
    })
}
