//! Block segmentation.
//!
//! Splits a token span into one block per top-level statement. A statement
//! runs up to the next line break, unless a `start` shows up first: then it
//! runs through the `end` matching that `start`, however deeply the body
//! nests. Bodies are left whole here and only split once the node builder
//! descends into them.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Extent of one statement inside a token span, as the half-open index
/// range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    pub fn new(start: usize, end: usize) -> Self {
        Block { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Index of the statement's final token, if it has one.
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    pub fn slice<'a>(&self, tokens: &'a [Token]) -> &'a [Token] {
        &tokens[self.start..self.end]
    }
}

fn ends_candidate(token: &Token) -> bool {
    token.is_terminator() || token.kind == TokenKind::Start
}

/// Segments `tokens` into top-level statements.
///
/// The span may end in an `EOF` token or simply stop; both close the final
/// statement. A trailing empty statement (left by a final line break) is
/// dropped, any other one is kept.
pub fn gen_blocks(tokens: &[Token]) -> Result<Vec<Block>, Error> {
    let count = tokens.len();
    let mut blocks = Vec::new();
    let mut curr = 0;

    while curr < count {
        if curr > 0 && tokens[curr - 1].kind != TokenKind::Linebreak {
            return Err(Error::new(
                ErrorImpl::Formatting,
                tokens[curr - 1].position.clone(),
            ));
        }

        let start = curr;
        while curr < count && !ends_candidate(&tokens[curr]) {
            curr += 1;
        }

        if curr == count || tokens[curr].is_terminator() {
            blocks.push(Block::new(start, curr));
            curr += 1;
            continue;
        }

        // Opening keyword: run to the `end` at the same depth
        let mut depth = 1;
        curr += 1;
        while curr < count
            && tokens[curr].kind != TokenKind::EOF
            && !(depth == 1 && tokens[curr].kind == TokenKind::End)
        {
            match tokens[curr].kind {
                TokenKind::Start => depth += 1,
                TokenKind::End => depth -= 1,
                _ => {}
            }
            curr += 1;
        }

        if curr == count || tokens[curr].kind == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnclosedBlock,
                tokens[curr - 1].position.clone(),
            ));
        }

        blocks.push(Block::new(start, curr + 1));
        curr += 2;
    }

    if blocks.last().is_some_and(Block::is_empty) {
        blocks.pop();
    }

    if blocks.is_empty() {
        let position = tokens
            .first()
            .map(|token| token.position.clone())
            .unwrap_or_else(Position::null);
        return Err(Error::new(ErrorImpl::EmptyInput, position));
    }

    Ok(blocks)
}
