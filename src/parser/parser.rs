//! Parser state and entry points.
//!
//! The parser itself holds no tokens: every call works on a borrowed span,
//! so each recursive step sees only the statement or operand it builds.
//! What it does hold is the operator table used for precedence resolution
//! and a depth counter guarding the recursion.

use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position,
};

use super::{
    lookups::{Operator, OperatorTable},
    node::parse_node,
};

/// Nesting depth accepted before the build is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 256;

pub struct Parser {
    /// Arity and precedence of every builtin operator
    operators: OperatorTable,
    /// Number of node builds currently on the stack
    depth: usize,
    /// Limit for `depth`
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance using `operators` for precedence
    /// resolution and the default recursion limit.
    pub fn new(operators: OperatorTable) -> Self {
        Parser {
            operators,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the recursion limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the operator metadata for a builtin lexeme.
    pub fn get_operator(&self, lexeme: &str) -> Option<&Operator> {
        self.operators.get(lexeme)
    }

    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    /// Builds the tree for a whole token stream.
    pub fn parse(&mut self, tokens: &[Token]) -> Result<AstNode, Error> {
        self.depth = 0;
        parse_node(self, tokens)
    }

    pub(super) fn enter(&mut self, tokens: &[Token]) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            let position = tokens
                .first()
                .map(|token| token.position.clone())
                .unwrap_or_else(Position::null);

            return Err(Error::new(
                ErrorImpl::RecursionLimit {
                    limit: self.max_depth,
                },
                position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit(&mut self) {
        self.depth -= 1;
    }
}

/// Parses a token stream into a tree.
///
/// This is the main entry point: a fresh parser with the default recursion
/// limit builds the whole stream, which is expected to end in `EOF`.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by the lexer
/// * `operators` - Arity and precedence of the builtin operators
pub fn parse(tokens: &[Token], operators: &OperatorTable) -> Result<AstNode, Error> {
    Parser::new(operators.clone()).parse(tokens)
}
