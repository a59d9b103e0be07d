use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{blocks::gen_blocks, lookups::{Arity, Operator}, parser::Parser};

/// Builds the node for one token span.
///
/// A span holding several statements becomes a group; a single statement
/// is either a control structure, a terminal or an operator expression.
pub fn parse_node(parser: &mut Parser, tokens: &[Token]) -> Result<AstNode, Error> {
    parser.enter(tokens)?;
    let node = build_node(parser, tokens);
    parser.exit();

    node
}

fn build_node(parser: &mut Parser, tokens: &[Token]) -> Result<AstNode, Error> {
    let blocks = gen_blocks(tokens)?;

    if blocks.len() >= 2 {
        let mut children = Vec::with_capacity(blocks.len());
        for block in &blocks {
            // A blank line between statements
            if block.is_empty() {
                return Err(Error::new(
                    ErrorImpl::EmptyInput,
                    tokens[block.start].position.clone(),
                ));
            }

            children.push(parse_node(parser, block.slice(tokens))?);
        }

        return Ok(AstNode::Group {
            marker: Token::group(tokens[0].position.clone()),
            children,
        });
    }

    let tokens = blocks[0].slice(tokens);

    if tokens.last().map(|token| token.kind) == Some(TokenKind::End) {
        return parse_control(parser, tokens);
    }

    if tokens.len() == 1 {
        return Ok(AstNode::Terminal {
            token: tokens[0].clone(),
        });
    }

    parse_expression(parser, tokens)
}

/// `keyword condition start <linebreak> body end`
fn parse_control(parser: &mut Parser, tokens: &[Token]) -> Result<AstNode, Error> {
    let len = tokens.len();
    let start = (2..len - 1)
        .find(|&i| tokens[i].kind == TokenKind::Start)
        .unwrap_or(len - 1);

    // Without an opener there is no body to build
    if start == len - 1 {
        return Err(Error::new(
            ErrorImpl::EmptyBlock,
            tokens[start].position.clone(),
        ));
    }

    let condition = parse_node(parser, &tokens[1..start])?;

    if len - start < 4 {
        return Err(Error::new(
            ErrorImpl::EmptyBlock,
            tokens[start].position.clone(),
        ));
    }

    let body = parse_node(parser, &tokens[start + 2..len - 1])?;

    Ok(AstNode::Control {
        keyword: tokens[0].clone(),
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

fn parse_expression(parser: &mut Parser, tokens: &[Token]) -> Result<AstNode, Error> {
    let mut lowest = None;
    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Builtin {
            continue;
        }

        if let Some(operator) = parser.get_operator(&token.value) {
            match lowest {
                Some((_, Operator { precedence, .. })) if operator.precedence >= precedence => {}
                _ => lowest = Some((i, *operator)),
            }
        }
    }

    let Some((pos, Operator { arity, .. })) = lowest else {
        return Err(Error::new(
            ErrorImpl::UnrecognizedSymbol {
                token: tokens[0].value.clone(),
            },
            tokens[0].position.clone(),
        ));
    };

    let operator = tokens[pos].clone();

    match arity {
        Arity::Unary => {
            if pos != 0 {
                return Err(Error::new(
                    ErrorImpl::Position { arity },
                    tokens[0].position.clone(),
                ));
            }

            let operand = parse_node(parser, &tokens[1..])?;

            Ok(AstNode::Unary {
                operator,
                operand: Box::new(operand),
            })
        }
        Arity::Binary => {
            if pos == 0 || pos == tokens.len() - 1 {
                return Err(Error::new(
                    ErrorImpl::Position { arity },
                    tokens[0].position.clone(),
                ));
            }

            let left = parse_node(parser, &tokens[..pos])?;
            let right = parse_node(parser, &tokens[pos + 1..])?;

            Ok(AstNode::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}
