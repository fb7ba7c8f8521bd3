//! FILENAME: core/parser/src/validator.rs
//! PURPOSE: Structural checks on the raw (canonicalized, untokenized) expression.
//! CONTEXT: Runs before tokenizing and reports bracket mismatches, illegal
//! leading/trailing characters and empty date literals. Validation is advisory;
//! callers decide whether to continue after a failed report.
//!
//! Once a non-bracket error is recorded, the remaining non-bracket checks are
//! skipped. Bracket matching keeps running for the whole string, and every bracket
//! still open at the end is reported at its own position.

use crate::chars::{is_comma, is_dot, is_letter, is_sharp};
use crate::error::{error_positions, ErrorCode, ParseError};
use crate::ops::OperatorSet;

/// Partner of an opening bracket.
fn closing_partner(ch: char) -> Option<char> {
    match ch {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closing_bracket(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// Outcome of one `validate` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<ParseError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub fn error_positions(&self) -> Vec<usize> {
        error_positions(&self.errors)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    operators: OperatorSet,
}

impl Validator {
    pub fn new(operators: OperatorSet) -> Self {
        Validator { operators }
    }

    /// Scans the trimmed input once. Positions in the report are character
    /// indexes into `input` itself (leading whitespace included).
    pub fn validate(&self, input: &str) -> ValidationReport {
        let offset = input.chars().take_while(|ch| ch.is_whitespace()).count();
        let chars: Vec<char> = input.trim().chars().collect();
        let last = chars.len().saturating_sub(1);

        let mut errors: Vec<ParseError> = Vec::new();
        let mut brackets: Vec<(char, usize)> = Vec::new();
        let mut in_date = false;

        for (index, &ch) in chars.iter().enumerate() {
            let position = index + offset;

            if closing_partner(ch).is_some() {
                if index == last {
                    errors.push(ParseError::at(ErrorCode::MissingClosingBracket, ch, position));
                } else {
                    brackets.push((ch, position));
                }
                continue;
            }

            if is_closing_bracket(ch) {
                match brackets.last() {
                    Some(&(open, _)) if closing_partner(open) == Some(ch) => {
                        brackets.pop();
                    }
                    _ => errors.push(ParseError::at(ErrorCode::MissingOpeningBracket, ch, position)),
                }
                continue;
            }

            if !errors.is_empty() {
                continue;
            }

            if is_sharp(ch) {
                if !in_date && chars.get(index + 1).copied().is_some_and(is_sharp) {
                    errors.push(ParseError::at(ErrorCode::EmptyDate, ch, position));
                }
                in_date = !in_date;
                continue;
            }

            if index == 0 {
                if let Some(code) = self.leading_error(ch) {
                    errors.push(ParseError::at(code, ch, position));
                    continue;
                }
            }

            if index == last {
                if let Some(code) = self.trailing_error(ch) {
                    errors.push(ParseError::at(code, ch, position));
                }
            }
        }

        for (open, position) in brackets {
            errors.push(ParseError::at(ErrorCode::MissingClosingBracket, open, position));
        }

        ValidationReport { errors }
    }

    fn leading_error(&self, ch: char) -> Option<ErrorCode> {
        if self.operators.is_operator_char(ch, &['-']) {
            Some(ErrorCode::LeadingOperator)
        } else if is_comma(ch) {
            Some(ErrorCode::LeadingComma)
        } else if is_dot(ch) {
            Some(ErrorCode::LeadingDot)
        } else {
            None
        }
    }

    fn trailing_error(&self, ch: char) -> Option<ErrorCode> {
        if self.operators.is_operator_char(ch, &[]) {
            Some(ErrorCode::TrailingOperator)
        } else if is_comma(ch) {
            Some(ErrorCode::TrailingComma)
        } else if is_dot(ch) {
            Some(ErrorCode::TrailingDot)
        } else if is_letter(ch) {
            Some(ErrorCode::UncalledIdentifier)
        } else {
            None
        }
    }
}

/// Validates with the arithmetic operator set.
pub fn validate(input: &str) -> ValidationReport {
    Validator::default().validate(input)
}
