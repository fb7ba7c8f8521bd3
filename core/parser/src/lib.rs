//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the math expression parser.
//! CONTEXT: This crate turns expression strings into tokens, RPN and an AST.
//! Resolving variables and calling functions lives in the engine crate.
//!
//! PIPELINE: Raw String --> VariableMarks --> Validator --> prepare --> Lexer
//!           --> Tokens --> to_rpn --> RPN --> build_ast --> AST
//!
//! SUPPORTED SYNTAX:
//! - Numbers: 12, 2.5
//! - Operators: + - * / ^ (or the extended set, see `ops`)
//! - Variables between marks: [x], or {x} with custom marks
//! - Date literals: #10/10/2020#
//! - Function calls with fixed arity: pow(2, 3)
//! - Unary minus at the start, after "(" and after ","

pub mod ast;
pub mod chars;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod ops;
pub mod parser;
pub mod token;
pub mod validator;


pub use ast::{bounded_arity, build_ast, Node, MAX_ARITY};
pub use error::{error_positions, ConfigError, ErrorCode, ParseError, UnknownErrorCode};
pub use lexer::{tokenize, Lexer};
pub use normalize::{prepare, VariableMarks};
pub use ops::{Associativity, OperatorInfo, OperatorSet};
pub use parser::{rpn_to_string, to_rpn};
pub use token::{Token, TokenKind};
pub use validator::{validate, ValidationReport, Validator};
