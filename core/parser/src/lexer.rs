//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a prepared expression string and produces the token sequence.
//! CONTEXT: First stage of the pipeline after normalization. A single left-to-right
//! pass with four buffers (digits, letters, variable, date) and two modes
//! (inside `[...]`, inside `#...#`).
//!
//! BOUNDARY BEHAVIOR (kept on purpose, the validator is the gate):
//! - A letter run only becomes a FunctionName when immediately followed by `(`;
//!   otherwise it is dropped.
//! - An unterminated `[` or `#` swallows the rest of the input without emitting.
//! - Unrecognized characters are dropped.

use std::iter::Peekable;
use std::str::Chars;

use crate::chars::{
    is_comma, is_digit, is_dot, is_left_bracket, is_left_parenthesis, is_letter,
    is_right_bracket, is_right_parenthesis, is_sharp,
};
use crate::normalize::prepare;
use crate::ops::OperatorSet;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    operators: OperatorSet,
    tokens: Vec<Token>,
    digits: String,
    letters: String,
    variable: String,
    date: String,
    in_variable: bool,
    in_date: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over an already prepared string (see `normalize::prepare`).
    pub fn new(input: &'a str) -> Self {
        Lexer::with_operators(input, OperatorSet::default())
    }

    pub fn with_operators(input: &'a str, operators: OperatorSet) -> Self {
        Lexer {
            input: input.chars().peekable(),
            operators,
            tokens: Vec::new(),
            digits: String::new(),
            letters: String::new(),
            variable: String::new(),
            date: String::new(),
            in_variable: false,
            in_date: false,
        }
    }

    /// Consumes the whole input and returns the tokens in source order.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.input.next() {
            self.scan(ch);
        }
        self.flush_number();
        self.tokens
    }

    fn scan(&mut self, ch: char) {
        if self.in_variable {
            if is_right_bracket(ch) {
                let name = std::mem::take(&mut self.variable);
                self.push(TokenKind::Variable, name);
                self.in_variable = false;
            } else {
                self.variable.push(ch);
            }
            return;
        }

        if self.in_date {
            if is_sharp(ch) {
                let text = std::mem::take(&mut self.date);
                self.push(TokenKind::Date, text);
                self.in_date = false;
            } else {
                self.date.push(ch);
            }
            return;
        }

        if is_letter(ch) {
            self.letters.push(ch);
            return;
        }

        if is_left_parenthesis(ch) {
            self.flush_number();
            if !self.letters.is_empty() {
                let name = std::mem::take(&mut self.letters);
                self.push(TokenKind::FunctionName, name);
            }
            self.push(TokenKind::LeftParenthesis, ch);
            return;
        }

        // Anything other than a letter or '(' ends a pending identifier without a call.
        self.letters.clear();

        if is_left_bracket(ch) {
            self.in_variable = true;
        } else if is_sharp(ch) {
            self.in_date = true;
        } else if is_digit(ch) || is_dot(ch) {
            self.digits.push(ch);
        } else if is_comma(ch) {
            self.flush_number();
            self.push(TokenKind::FunctionArgumentSeparator, ch);
        } else if is_right_parenthesis(ch) {
            self.flush_number();
            self.push(TokenKind::RightParenthesis, ch);
        } else if let Some(symbol) = self.read_operator(ch) {
            self.flush_number();
            self.push(TokenKind::Operator, symbol);
        }
    }

    /// Longest match against the active operator set, so `>>>` and `**`
    /// come out as one token in the extended set.
    fn read_operator(&mut self, first: char) -> Option<String> {
        if !self.operators.is_operator_char(first, &[]) {
            return None;
        }

        let mut symbol = String::from(first);
        while let Some(&next) = self.input.peek() {
            let mut candidate = symbol.clone();
            candidate.push(next);
            if !self.operators.has_prefix(&candidate) {
                break;
            }
            symbol = candidate;
            self.input.next();
        }
        Some(symbol)
    }

    fn flush_number(&mut self) {
        if !self.digits.is_empty() {
            let number = std::mem::take(&mut self.digits);
            self.push(TokenKind::Number, number);
        }
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens.push(Token::new(kind, text.into()));
    }
}

/// Prepares `input` (whitespace, unary minus) and tokenizes it.
pub fn tokenize(input: &str, operators: OperatorSet) -> Vec<Token> {
    let prepared = prepare(input);
    Lexer::with_operators(&prepared, operators).tokenize()
}
