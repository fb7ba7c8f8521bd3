//! FILENAME: core/parser/src/chars.rs
//! PURPOSE: Stateless character predicates shared by the tokenizer and the validator.
//! CONTEXT: Every predicate is total. Characters that match none of them are
//! dropped by the tokenizer.

/// Operators of the canonical arithmetic set.
pub const OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// A letter is any character whose lower- and upper-case forms differ.
/// This deliberately rejects caseless scripts and symbols such as `_`.
pub fn is_letter(ch: char) -> bool {
    ch.to_lowercase().ne(ch.to_uppercase())
}

/// Member of `+ - * / ^`, unless listed in `excluded`.
/// The validator passes `&['-']` to allow a leading unary minus.
pub fn is_operator(ch: char, excluded: &[char]) -> bool {
    OPERATORS.contains(&ch) && !excluded.contains(&ch)
}

pub fn is_left_parenthesis(ch: char) -> bool {
    ch == '('
}

pub fn is_right_parenthesis(ch: char) -> bool {
    ch == ')'
}

/// Opening variable delimiter (configured marks are canonicalized to `[` first).
pub fn is_left_bracket(ch: char) -> bool {
    ch == '['
}

/// Closing variable delimiter.
pub fn is_right_bracket(ch: char) -> bool {
    ch == ']'
}

pub fn is_comma(ch: char) -> bool {
    ch == ','
}

pub fn is_dot(ch: char) -> bool {
    ch == '.'
}

/// Date literal delimiter: `#10/10/2020#`.
pub fn is_sharp(ch: char) -> bool {
    ch == '#'
}
