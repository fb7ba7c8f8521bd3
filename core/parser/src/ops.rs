//! FILENAME: core/parser/src/ops.rs
//! PURPOSE: Operator metadata (precedence and associativity) for each supported operator set.
//! CONTEXT: The tokenizer uses the symbol tables to recognize operators, the validator
//! uses them for leading/trailing checks, and the shunting-yard converter uses the
//! precedence/associativity pairs to order the RPN output.
//!
//! ```text
//! ARITHMETIC (default):
//!   ^        3  right   (power)
//!   * /      2  left
//!   + -      1  left
//!
//! EXTENDED (JavaScript precedence levels):
//!   **       15 right   (power)
//!   * / %    13 left
//!   + -      12 left
//!   << >> >>> 11 left
//!   < >      10 left
//!   &        8  left
//!   ^        7  left    (bitwise XOR)
//!   |        6  left
//! ```

use serde::{Deserialize, Serialize};

use crate::chars::is_operator;

/// Associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Associativity {
    Left,
    Right,
}

/// Precedence and associativity of one operator. Higher precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorInfo {
    const fn left(precedence: u8) -> Self {
        OperatorInfo {
            precedence,
            associativity: Associativity::Left,
        }
    }

    const fn right(precedence: u8) -> Self {
        OperatorInfo {
            precedence,
            associativity: Associativity::Right,
        }
    }
}

const ARITHMETIC: &[(&str, OperatorInfo)] = &[
    ("+", OperatorInfo::left(1)),
    ("-", OperatorInfo::left(1)),
    ("*", OperatorInfo::left(2)),
    ("/", OperatorInfo::left(2)),
    ("^", OperatorInfo::right(3)),
];

const EXTENDED: &[(&str, OperatorInfo)] = &[
    ("|", OperatorInfo::left(6)),
    ("^", OperatorInfo::left(7)),
    ("&", OperatorInfo::left(8)),
    ("<", OperatorInfo::left(10)),
    (">", OperatorInfo::left(10)),
    ("<<", OperatorInfo::left(11)),
    (">>", OperatorInfo::left(11)),
    (">>>", OperatorInfo::left(11)),
    ("+", OperatorInfo::left(12)),
    ("-", OperatorInfo::left(12)),
    ("*", OperatorInfo::left(13)),
    ("/", OperatorInfo::left(13)),
    ("%", OperatorInfo::left(13)),
    ("**", OperatorInfo::right(15)),
];

/// The operator table in effect for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorSet {
    /// `+ - * / ^` with `^` as right-associative power.
    #[default]
    Arithmetic,
    /// The bitwise/extended set: `| ^ & < > << >> >>> % **` on top of `+ - * /`.
    Extended,
}

impl OperatorSet {
    fn table(self) -> &'static [(&'static str, OperatorInfo)] {
        match self {
            OperatorSet::Arithmetic => ARITHMETIC,
            OperatorSet::Extended => EXTENDED,
        }
    }

    /// Looks up precedence/associativity for an operator symbol.
    pub fn info(self, symbol: &str) -> Option<OperatorInfo> {
        self.table()
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, info)| *info)
    }

    /// All operator symbols of the set.
    pub fn symbols(self) -> impl Iterator<Item = &'static str> {
        self.table().iter().map(|(s, _)| *s)
    }

    /// True if `ch` can start (or continue) an operator of this set,
    /// unless it is listed in `excluded`.
    pub fn is_operator_char(self, ch: char, excluded: &[char]) -> bool {
        match self {
            OperatorSet::Arithmetic => is_operator(ch, excluded),
            OperatorSet::Extended => {
                !excluded.contains(&ch) && self.symbols().any(|s| s.contains(ch))
            }
        }
    }

    /// True if some operator of the set starts with `prefix`.
    /// Used by the tokenizer for longest-match lexing of `<<`, `>>>`, `**`.
    pub fn has_prefix(self, prefix: &str) -> bool {
        self.symbols().any(|s| s.starts_with(prefix))
    }
}
