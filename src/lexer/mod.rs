//! Lexical analysis module.
//!
//! Converts script source into the flat token stream consumed by the tree
//! builder. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of block delimiters, control keywords and builtin operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
