//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Shunting-yard conversion of the token sequence into reverse Polish notation.
//! CONTEXT: Second stage of the pipeline. Consumes the lexer output in one pass with
//! an output queue and an operator stack, both local to the call.
//!
//! RULES:
//!   Number | Variable | Date      --> output
//!   FunctionName | "("            --> stack
//!   ","                           --> pop to output until "(" (code 140 if none)
//!   Operator op                   --> pop operators binding at least as tightly, push op
//!   ")"                           --> pop to output until "(", drop it, then pop a
//!                                     FunctionName sitting under it
//!   end of input                  --> pop everything; a leftover "(" is code 10

use log::trace;

use crate::error::{ErrorCode, ParseError};
use crate::ops::{Associativity, OperatorSet};
use crate::token::{Token, TokenKind};

struct ShuntingYard<'e> {
    operators: OperatorSet,
    output: Vec<Token>,
    stack: Vec<Token>,
    errors: &'e mut Vec<ParseError>,
}

impl<'e> ShuntingYard<'e> {
    fn new(operators: OperatorSet, errors: &'e mut Vec<ParseError>) -> Self {
        ShuntingYard {
            operators,
            output: Vec::new(),
            stack: Vec::new(),
            errors,
        }
    }

    fn top_kind(&self) -> Option<TokenKind> {
        self.stack.last().map(|token| token.kind)
    }

    fn pop_to_output(&mut self) {
        if let Some(token) = self.stack.pop() {
            self.output.push(token);
        }
    }

    /// Pops to output until a "(" is on top. Returns false if the stack ran empty.
    fn pop_until_left_parenthesis(&mut self) -> bool {
        loop {
            match self.top_kind() {
                Some(TokenKind::LeftParenthesis) => return true,
                Some(_) => self.pop_to_output(),
                None => return false,
            }
        }
    }

    fn push_token(&mut self, token: &Token) {
        match token.kind {
            TokenKind::Number | TokenKind::Variable | TokenKind::Date => {
                self.output.push(token.clone());
            }
            TokenKind::FunctionName | TokenKind::LeftParenthesis => {
                self.stack.push(token.clone());
            }
            TokenKind::FunctionArgumentSeparator => {
                if !self.pop_until_left_parenthesis() {
                    self.errors
                        .push(ParseError::unlocated(ErrorCode::MissingSeparatorOrParenthesis));
                }
            }
            TokenKind::Operator => {
                while self.should_pop_before(&token.text) {
                    self.pop_to_output();
                }
                self.stack.push(token.clone());
            }
            TokenKind::RightParenthesis => {
                if self.pop_until_left_parenthesis() {
                    self.stack.pop();
                    if self.top_kind() == Some(TokenKind::FunctionName) {
                        self.pop_to_output();
                    }
                } else {
                    self.errors.push(ParseError::new(
                        ErrorCode::MissingOpeningBracket,
                        token.text.clone(),
                        None,
                    ));
                }
            }
        }
    }

    /// True if the operator on top of the stack binds at least as tightly as
    /// `incoming`: higher precedence, or equal precedence with a left-associative
    /// incoming operator. Functions and parentheses stop the popping.
    fn should_pop_before(&self, incoming: &str) -> bool {
        let Some(top) = self.stack.last() else {
            return false;
        };
        if top.kind != TokenKind::Operator {
            return false;
        }

        let (Some(top), Some(op)) = (self.operators.info(&top.text), self.operators.info(incoming))
        else {
            return false;
        };

        match op.associativity {
            Associativity::Left => top.precedence >= op.precedence,
            Associativity::Right => top.precedence > op.precedence,
        }
    }

    fn finish(mut self) -> Vec<Token> {
        while let Some(token) = self.stack.pop() {
            if token.kind == TokenKind::LeftParenthesis {
                self.errors.push(ParseError::new(
                    ErrorCode::MissingClosingBracket,
                    token.text,
                    None,
                ));
            } else {
                self.output.push(token);
            }
        }
        self.output
    }
}

/// Converts infix tokens into RPN. New errors are appended to `errors`.
pub fn to_rpn(tokens: &[Token], operators: OperatorSet, errors: &mut Vec<ParseError>) -> Vec<Token> {
    let mut converter = ShuntingYard::new(operators, errors);
    for token in tokens {
        converter.push_token(token);
    }
    let rpn = converter.finish();
    trace!("converted {} tokens into {} RPN items", tokens.len(), rpn.len());
    rpn
}

/// Renders an RPN sequence as space-separated token texts: `y 3 pow`.
pub fn rpn_to_string(rpn: &[Token]) -> String {
    rpn.iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
