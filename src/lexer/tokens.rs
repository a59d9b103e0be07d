use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("start", TokenKind::Start);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("elsif", TokenKind::Elsif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map
    };
}

pub const GROUP_MARKER: &str = "GROUP";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Linebreak,
    Number,
    String,
    Identifier,

    /// An operator found in the operator table.
    Builtin,
    /// Synthetic label of a node holding several statements.
    Group,

    // Block delimiters
    Start,
    End,

    // Control keywords
    If,
    Elsif,
    Else,
    While,
    For,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn group(position: Position) -> Self {
        Token {
            kind: TokenKind::Group,
            value: String::from(GROUP_MARKER),
            position,
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line()
    }

    /// True for the tokens that end a statement candidate.
    pub fn is_terminator(&self) -> bool {
        matches!(self.kind, TokenKind::EOF | TokenKind::Linebreak)
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Builtin,
        ]) {
            println!("{} ({}) line {}", self.kind, self.value, self.line());
        } else {
            println!("{} () line {}", self.kind, self.line());
        }
    }
}
