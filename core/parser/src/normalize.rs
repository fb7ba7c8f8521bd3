//! FILENAME: core/parser/src/normalize.rs
//! PURPOSE: Textual preprocessing applied before classification.
//! CONTEXT: Two independent passes. `VariableMarks::canonicalize` maps configured
//! variable delimiters to `[`/`]` before validation. `prepare` strips whitespace
//! and rewrites unary minus right before tokenizing.

use crate::chars::{is_digit, is_letter};
use crate::error::ConfigError;

pub const CANONICAL_OPEN: &str = "[";
pub const CANONICAL_CLOSE: &str = "]";

/// Removes all whitespace, then rewrites unary minus as a subtraction from zero:
/// `(-1` becomes `(0-1`, `,-3` becomes `,0-3`, and a leading `-` gets a `0` prefix.
pub fn prepare(input: &str) -> String {
    let mut prepared = replace_unary_minus(&delete_whitespace(input));
    if prepared.starts_with('-') {
        prepared.insert(0, '0');
    }
    prepared
}

pub fn delete_whitespace(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Not parenthesis-aware: every `(-` and `,-` is rewritten.
pub fn replace_unary_minus(input: &str) -> String {
    input.replace("(-", "(0-").replace(",-", ",0-")
}

pub fn has_letters_or_digits(text: &str) -> bool {
    text.chars().any(|ch| is_letter(ch) || is_digit(ch))
}

/// Opening/closing marks that delimit variable references in raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableMarks {
    open: String,
    close: String,
}

impl VariableMarks {
    /// Checks the pair: both non-empty, distinct, and free of letters and digits.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, ConfigError> {
        let open = open.into();
        let close = close.into();

        if open.is_empty() || close.is_empty() {
            return Err(ConfigError::EmptyMark);
        }
        if open == close {
            return Err(ConfigError::EqualMarks(open));
        }
        for mark in [&open, &close] {
            if has_letters_or_digits(mark) {
                return Err(ConfigError::AlphanumericMark(mark.clone()));
            }
        }

        Ok(VariableMarks { open, close })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn is_canonical(&self) -> bool {
        self.open == CANONICAL_OPEN && self.close == CANONICAL_CLOSE
    }

    /// Replaces every occurrence of the configured marks with `[` and `]`.
    pub fn canonicalize(&self, input: &str) -> String {
        if self.is_canonical() {
            return input.to_string();
        }
        input
            .replace(&self.open, CANONICAL_OPEN)
            .replace(&self.close, CANONICAL_CLOSE)
    }
}

impl Default for VariableMarks {
    fn default() -> Self {
        VariableMarks {
            open: CANONICAL_OPEN.to_string(),
            close: CANONICAL_CLOSE.to_string(),
        }
    }
}
