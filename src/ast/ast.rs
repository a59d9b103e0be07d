use std::fmt::{self, Display};

use crate::lexer::tokens::{Token, TokenKind};

/// Node of the syntax tree.
///
/// Every variant owns its children outright, so a tree is dropped as a
/// whole together with its root. Child counts follow from the variant:
/// operators carry as many operands as their arity and control structures
/// always carry a condition and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// Two or more statements, in source order.
    Group {
        marker: Token,
        children: Vec<AstNode>,
    },
    /// `keyword condition start ... end`
    Control {
        keyword: Token,
        condition: Box<AstNode>,
        body: Box<AstNode>,
    },
    Terminal {
        token: Token,
    },
    Unary {
        operator: Token,
        operand: Box<AstNode>,
    },
    Binary {
        operator: Token,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
}

/// Node Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Group,
    Control,
    Terminal,
    Unary,
    Binary,
}

impl AstNode {
    /// The token labelling this node.
    pub fn value(&self) -> &Token {
        match self {
            AstNode::Group { marker, .. } => marker,
            AstNode::Control { keyword, .. } => keyword,
            AstNode::Terminal { token } => token,
            AstNode::Unary { operator, .. } => operator,
            AstNode::Binary { operator, .. } => operator,
        }
    }

    pub fn get_node_type(&self) -> NodeType {
        match self {
            AstNode::Group { .. } => NodeType::Group,
            AstNode::Control { .. } => NodeType::Control,
            AstNode::Terminal { .. } => NodeType::Terminal,
            AstNode::Unary { .. } => NodeType::Unary,
            AstNode::Binary { .. } => NodeType::Binary,
        }
    }

    /// Children in evaluation order.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::Group { children, .. } => children.iter().collect(),
            AstNode::Control {
                condition, body, ..
            } => vec![condition.as_ref(), body.as_ref()],
            AstNode::Terminal { .. } => vec![],
            AstNode::Unary { operand, .. } => vec![operand.as_ref()],
            AstNode::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Height of the subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(AstNode::depth)
            .max()
            .unwrap_or(0)
    }
}

impl Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.value();

        if let AstNode::Terminal { .. } = self {
            return match token.kind {
                TokenKind::String => write!(f, "{:?}", token.value),
                _ => write!(f, "{}", token.value),
            };
        }

        write!(f, "({}", token.value)?;
        for child in self.children() {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
