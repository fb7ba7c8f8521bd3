//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error records for malformed expressions and the configuration error type.
//! CONTEXT: Expression errors are collected, never returned as `Err`. Each carries a
//! stable numeric code that embedding UIs key their behavior off.
//!
//! CODES:
//!   10  missing closing bracket        90  trailing bare identifier
//!   20  missing opening bracket        100 unconsumed stack items after RPN replay
//!   30  leading operator               110 unknown function arity
//!   40  trailing operator              120 unknown function implementation
//!   50  leading comma                  130 unknown variable
//!   60  trailing comma                 140 missing comma or opening parenthesis
//!   70  leading dot                    150 empty date literal
//!   80  trailing dot                   160 unparseable date literal

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes reported for expressions. Serialized as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ErrorCode {
    MissingClosingBracket,
    MissingOpeningBracket,
    LeadingOperator,
    TrailingOperator,
    LeadingComma,
    TrailingComma,
    LeadingDot,
    TrailingDot,
    UncalledIdentifier,
    UnusedItems,
    UnknownArity,
    UnknownFunction,
    UnknownVariable,
    MissingSeparatorOrParenthesis,
    EmptyDate,
    InvalidDate,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::MissingClosingBracket,
        ErrorCode::MissingOpeningBracket,
        ErrorCode::LeadingOperator,
        ErrorCode::TrailingOperator,
        ErrorCode::LeadingComma,
        ErrorCode::TrailingComma,
        ErrorCode::LeadingDot,
        ErrorCode::TrailingDot,
        ErrorCode::UncalledIdentifier,
        ErrorCode::UnusedItems,
        ErrorCode::UnknownArity,
        ErrorCode::UnknownFunction,
        ErrorCode::UnknownVariable,
        ErrorCode::MissingSeparatorOrParenthesis,
        ErrorCode::EmptyDate,
        ErrorCode::InvalidDate,
    ];

    /// The numeric code consumers match on.
    pub fn code(self) -> u16 {
        match self {
            ErrorCode::MissingClosingBracket => 10,
            ErrorCode::MissingOpeningBracket => 20,
            ErrorCode::LeadingOperator => 30,
            ErrorCode::TrailingOperator => 40,
            ErrorCode::LeadingComma => 50,
            ErrorCode::TrailingComma => 60,
            ErrorCode::LeadingDot => 70,
            ErrorCode::TrailingDot => 80,
            ErrorCode::UncalledIdentifier => 90,
            ErrorCode::UnusedItems => 100,
            ErrorCode::UnknownArity => 110,
            ErrorCode::UnknownFunction => 120,
            ErrorCode::UnknownVariable => 130,
            ErrorCode::MissingSeparatorOrParenthesis => 140,
            ErrorCode::EmptyDate => 150,
            ErrorCode::InvalidDate => 160,
        }
    }

    /// Default human-readable message for the code.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::MissingClosingBracket => "Math expr misses closing bracket",
            ErrorCode::MissingOpeningBracket => "Math expr misses opening bracket",
            ErrorCode::LeadingOperator => "Math expr starts with an operator",
            ErrorCode::TrailingOperator => "Math expr ends with an operator",
            ErrorCode::LeadingComma => "Math expr starts with a comma",
            ErrorCode::TrailingComma => "Math expr ends with a comma",
            ErrorCode::LeadingDot => "Math expr starts with a dot",
            ErrorCode::TrailingDot => "Math expr ends with a dot",
            ErrorCode::UncalledIdentifier => "Math expr ends with an uncalled function or identifier",
            ErrorCode::UnusedItems => "Not all items were used while replaying the RPN",
            ErrorCode::UnknownArity => "Function arity is not configured",
            ErrorCode::UnknownFunction => "Function implementation is not configured",
            ErrorCode::UnknownVariable => "Variable is not configured",
            ErrorCode::MissingSeparatorOrParenthesis => "Missing comma or opening parenthesis",
            ErrorCode::EmptyDate => "Date is empty",
            ErrorCode::InvalidDate => "Date cannot be parsed",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(UnknownErrorCode(value))
    }
}

/// A number that is not one of the stable expression error codes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown expression error code {0}")]
pub struct UnknownErrorCode(pub u16);

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One recorded problem in an expression.
/// `position` is a character index into the validated text, `None` when the
/// problem has no location in the source (runtime errors).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub character: String,
    pub position: Option<usize>,
    pub code: ErrorCode,
    pub message: String,
}

impl ParseError {
    pub fn new(code: ErrorCode, character: impl Into<String>, position: Option<usize>) -> Self {
        ParseError {
            character: character.into(),
            position,
            code,
            message: code.message().to_string(),
        }
    }

    /// Error at a character of the source text.
    pub fn at(code: ErrorCode, ch: char, position: usize) -> Self {
        ParseError::new(code, ch.to_string(), Some(position))
    }

    /// Error with no source location.
    pub fn unlocated(code: ErrorCode) -> Self {
        ParseError::new(code, "", None)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Numeric code, shorthand for `self.code.code()`.
    pub fn code(&self) -> u16 {
        self.code.code()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "[{}] {} at {} ('{}')",
                self.code.code(),
                self.message,
                position,
                self.character
            ),
            None => write!(f, "[{}] {}", self.code.code(), self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Positions of the located errors, in emission order, for highlighting.
pub fn error_positions(errors: &[ParseError]) -> Vec<usize> {
    errors.iter().filter_map(|e| e.position).collect()
}

/// Invalid variable delimiter configuration. This is a programming error of the
/// embedder and is reported immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Variable marks must not be empty")]
    EmptyMark,

    #[error("Opening and closing variable marks are equal: {0:?}")]
    EqualMarks(String),

    #[error("Variable mark contains a letter or digit: {0:?}")]
    AlphanumericMark(String),
}
