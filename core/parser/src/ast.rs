//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Abstract syntax tree for expressions, assembled by replaying the RPN.
//! CONTEXT: The tree is structural: variables and dates stay as their raw text and
//! are only resolved by the evaluator. Operator nodes own two operands, function
//! nodes own as many operands as the configured arity. Operands missing from the
//! RPN are filled on the left with `NaN` leaves, the value the evaluator uses.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ParseError};
use crate::token::{Token, TokenKind};

/// A node of the expression tree. Leaves (number, variable, date) have no operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub token: Token,
    pub operands: Vec<Node>,
}

impl Node {
    pub fn new(token: Token, operands: Vec<Node>) -> Self {
        Node { token, operands }
    }

    pub fn leaf(token: Token) -> Self {
        Node::new(token, Vec::new())
    }
}

/// Largest arity honored when replaying RPN. Configured arities above it are
/// clamped so a bogus setting cannot drive the padding allocation.
pub const MAX_ARITY: usize = 255;

/// Clamps a configured arity to [`MAX_ARITY`].
pub fn bounded_arity(name: &str, arity: usize) -> usize {
    if arity > MAX_ARITY {
        warn!("'{}' declares arity {}, clamped to {}", name, arity, MAX_ARITY);
    }
    arity.min(MAX_ARITY)
}

/// Infix rendering: operators fully parenthesized, functions in call form,
/// variables in canonical `[name]` marks and dates in `#...#`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token.kind {
            TokenKind::Variable => write!(f, "[{}]", self.token.text),
            TokenKind::Date => write!(f, "#{}#", self.token.text),
            TokenKind::Operator => {
                write!(f, "(")?;
                for (i, operand) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", self.token.text)?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
            TokenKind::FunctionName => {
                write!(f, "{}(", self.token.text)?;
                for (i, operand) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
            _ => write!(f, "{}", self.token.text),
        }
    }
}

/// Pops `count` nodes and returns them in call (left-to-right) order. Missing
/// leading operands become `NaN` leaves.
fn pop_operands(stack: &mut Vec<Node>, count: usize, token: &Token) -> Vec<Node> {
    let available = count.min(stack.len());
    if available < count {
        warn!(
            "'{}' expects {} operands but only {} are available",
            token.text, count, available
        );
    }
    let start = stack.len() - available;
    let mut operands = vec![Node::leaf(Token::number("NaN")); count - available];
    operands.append(&mut stack.split_off(start));
    operands
}

/// Replays `rpn` into a tree. Unknown arities record code 110 (arity taken as 0);
/// leftover stack items record code 100. Returns `None` for an empty sequence.
pub fn build_ast(
    rpn: &[Token],
    arities: &HashMap<String, usize>,
    errors: &mut Vec<ParseError>,
) -> Option<Node> {
    let mut stack: Vec<Node> = Vec::new();

    for token in rpn {
        match token.kind {
            TokenKind::Number | TokenKind::Variable | TokenKind::Date => {
                stack.push(Node::leaf(token.clone()));
            }
            TokenKind::Operator => {
                let operands = pop_operands(&mut stack, 2, token);
                stack.push(Node::new(token.clone(), operands));
            }
            TokenKind::FunctionName => {
                let arity = match arities.get(&token.text) {
                    Some(&arity) => bounded_arity(&token.text, arity),
                    None => {
                        errors.push(
                            ParseError::new(ErrorCode::UnknownArity, token.text.clone(), None)
                                .with_message(format!(
                                    "Function with name \"{}\" has no configured arity",
                                    token.text
                                )),
                        );
                        0
                    }
                };
                let operands = pop_operands(&mut stack, arity, token);
                stack.push(Node::new(token.clone(), operands));
            }
            TokenKind::FunctionArgumentSeparator
            | TokenKind::LeftParenthesis
            | TokenKind::RightParenthesis => {}
        }
    }

    let root = stack.pop();
    if !stack.is_empty() {
        errors.push(ParseError::unlocated(ErrorCode::UnusedItems));
    }
    root
}
