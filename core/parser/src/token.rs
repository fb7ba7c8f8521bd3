//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression tokenizer.
//! CONTEXT: Tokens are produced by the lexer, reordered by the shunting-yard
//! converter, and replayed by the AST builder and the evaluator.

use serde::{Deserialize, Serialize};

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    /// Named reference written between variable delimiters: `[name]`.
    Variable,
    /// Date literal written between `#` marks.
    Date,
    FunctionName,
    FunctionArgumentSeparator,
    LeftParenthesis,
    RightParenthesis,
    Operator,
}

/// A token and the literal text it was built from.
/// Delimiters are not part of the text: `[x]` yields `Variable("x")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Number, text)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Token::new(TokenKind::Variable, name)
    }

    pub fn date(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Date, text)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Token::new(TokenKind::FunctionName, name)
    }

    pub fn operator(symbol: impl Into<String>) -> Self {
        Token::new(TokenKind::Operator, symbol)
    }

    pub fn separator() -> Self {
        Token::new(TokenKind::FunctionArgumentSeparator, ",")
    }

    pub fn left_parenthesis() -> Self {
        Token::new(TokenKind::LeftParenthesis, "(")
    }

    pub fn right_parenthesis() -> Self {
        Token::new(TokenKind::RightParenthesis, ")")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
