//! Unit tests for the parser module.
//!
//! Covers block segmentation, precedence resolution, control structures,
//! groups and every error the builder raises.

use crate::{
    ast::ast::{AstNode, NodeType},
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
};

use super::{
    blocks::{gen_blocks, Block},
    lookups::{Arity, Operator, OperatorTable},
    parser::{parse, Parser},
};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.bt".to_string()), &OperatorTable::builtin()).unwrap()
}

fn build(source: &str) -> Result<AstNode, Error> {
    parse(&lex(source), &OperatorTable::builtin())
}

fn render(source: &str) -> String {
    build(source).unwrap().to_string()
}

fn error_of(source: &str) -> (String, u32) {
    let error = build(source).unwrap_err();
    (error.get_error_name().to_string(), error.get_position().line())
}

#[test]
fn test_segment_simple_statements() {
    let tokens = lex("a = 1\nb = 2\n");
    let blocks = gen_blocks(&tokens).unwrap();

    assert_eq!(blocks, vec![Block::new(0, 3), Block::new(4, 7)]);
}

#[test]
fn test_segment_keeps_nested_body_whole() {
    let tokens = lex("while a start\nif b start\nx\nend\ny\nend\nz\n");
    let blocks = gen_blocks(&tokens).unwrap();

    assert_eq!(blocks, vec![Block::new(0, 15), Block::new(16, 17)]);
    // The outer block closes on the `end` matching the outer `start`
    assert_eq!(tokens[blocks[0].last().unwrap()].value, "end");
    assert_eq!(tokens[blocks[0].last().unwrap()].line(), 6);
}

#[test]
fn test_segment_without_trailing_linebreak() {
    let tokens = lex("a = 1");
    let blocks = gen_blocks(&tokens).unwrap();

    assert_eq!(blocks, vec![Block::new(0, 3)]);
}

#[test]
fn test_segment_sub_span_without_eof() {
    let tokens = lex("x = 1\ny = 2\n");
    let blocks = gen_blocks(&tokens[..7]).unwrap();

    assert_eq!(blocks, vec![Block::new(0, 3), Block::new(4, 7)]);
}

#[test]
fn test_segment_resegmenting_a_block_is_idempotent() {
    let tokens = lex("a = 1\nwhile a < 3 start\nif a start\nprint a\nend\na = a + 1\nend\nprint a\n");
    let blocks = gen_blocks(&tokens).unwrap();
    assert_eq!(blocks.len(), 3);

    for block in blocks {
        let span = block.slice(&tokens);
        assert_eq!(gen_blocks(span).unwrap(), vec![Block::new(0, span.len())]);
    }
}

#[test]
fn test_segment_empty_input() {
    let tokens = lex("");
    let error = gen_blocks(&tokens).unwrap_err();

    assert_eq!(error.get_error_name(), "EmptyInputError");
    assert_eq!(error.get_kind().to_string(), "parsing error");
    assert!(gen_blocks(&[]).is_err());
}

#[test]
fn test_segment_unclosed_block() {
    let tokens = lex("if x start\n");
    let error = gen_blocks(&tokens).unwrap_err();

    assert_eq!(error.get_error_name(), "UnclosedBlockError");
    assert_eq!(error.get_position().line(), 1);
}

#[test]
fn test_precedence_picks_loosest_operator() {
    assert_eq!(render("a + b * c\n"), "(+ a (* b c))");
    assert_eq!(render("a * b + c\n"), "(+ (* a b) c)");
    assert_eq!(render("x = a or b and c == d\n"), "(= x (or a (and b (== c d))))");
}

#[test]
fn test_equal_precedence_nests_to_the_right() {
    assert_eq!(render("a - b - c\n"), "(- a (- b c))");
    assert_eq!(render("print x = 1\n"), "(print (= x 1))");
}

#[test]
fn test_binary_node_children() {
    let node = build("a + b * c\n").unwrap();

    match &node {
        AstNode::Binary {
            operator,
            left,
            right,
        } => {
            assert_eq!(operator.value, "+");
            assert_eq!(left.value().value, "a");
            assert_eq!(right.get_node_type(), NodeType::Binary);
            assert_eq!(right.children().len(), 2);
        }
        _ => panic!("Expected binary node, got {:?}", node),
    }
    assert_eq!(node.depth(), 3);
}

#[test]
fn test_unary_operators() {
    assert_eq!(render("print a + b\n"), "(print (+ a b))");
    assert_eq!(render("a + not b\n"), "(+ a (not b))");

    let node = build("!done\n").unwrap();
    assert_eq!(node.get_node_type(), NodeType::Unary);
    assert_eq!(node.children().len(), 1);
}

#[test]
fn test_terminal_node() {
    let node = build("42\n").unwrap();

    assert_eq!(node.get_node_type(), NodeType::Terminal);
    assert!(node.children().is_empty());
    assert_eq!(node.depth(), 1);
    assert_eq!(render("\"hi\"\n"), "\"hi\"");
}

#[test]
fn test_control_structure() {
    let node = build("if x > 0 start\ny = 1\nend\n").unwrap();

    match &node {
        AstNode::Control {
            keyword,
            condition,
            body,
        } => {
            assert_eq!(keyword.value, "if");
            assert_eq!(condition.to_string(), "(> x 0)");
            assert_eq!(body.to_string(), "(= y 1)");
        }
        _ => panic!("Expected control node, got {:?}", node),
    }
}

#[test]
fn test_nested_control_structures() {
    let source = "while i < 3 start\nif i == 1 start\nprint i\nend\ni = i + 1\nend\n";

    assert_eq!(
        render(source),
        "(while (< i 3) (GROUP (if (== i 1) (print i)) (= i (+ i 1))))"
    );
}

#[test]
fn test_group_of_statements() {
    let node = build("a = 1\nb = 2\n").unwrap();

    assert_eq!(node.get_node_type(), NodeType::Group);
    assert_eq!(node.value().value, "GROUP");
    assert_eq!(node.value().line(), 1);
    assert_eq!(node.children().len(), 2);
    assert!(node
        .children()
        .iter()
        .all(|child| child.get_node_type() == NodeType::Binary));
}

#[test]
fn test_separated_control_structures_form_group() {
    let node = build("if a start\nx\nend\nif b start\ny\nend\n").unwrap();

    assert_eq!(node.get_node_type(), NodeType::Group);
    assert_eq!(node.children().len(), 2);
}

#[test]
fn test_missing_separator_is_formatting_error() {
    let (name, line) = error_of("if a start\nx\nend if b start\ny\nend\n");

    assert_eq!(name, "FormattingError");
    assert_eq!(line, 3);
}

#[test]
fn test_empty_block() {
    assert_eq!(error_of("if x start end\n"), ("EmptyBlockError".to_string(), 1));
    assert_eq!(error_of("while start\nx\nend\n").0, "EmptyBlockError");
}

#[test]
fn test_unclosed_block() {
    assert_eq!(error_of("if x start\n"), ("UnclosedBlockError".to_string(), 1));
    assert_eq!(error_of("a = 1\nwhile a start\nif a start\nb\nend\n").0, "UnclosedBlockError");
}

#[test]
fn test_binary_operator_position() {
    let error = build("x +\n").unwrap_err();

    assert_eq!(error.get_error_name(), "PositionError");
    assert_eq!(error.get_kind().to_string(), "binary operator in incorrect position");
    assert_eq!(error_of("* x\n").0, "PositionError");
}

#[test]
fn test_unary_operator_position() {
    let error = build("a not b\n").unwrap_err();

    assert_eq!(error.get_error_name(), "PositionError");
    assert_eq!(error.get_kind().to_string(), "unary operator in incorrect position");
}

#[test]
fn test_unrecognized_symbol() {
    assert_eq!(
        error_of("a = 1\nfoo bar\n"),
        ("UnrecognizedSymbolError".to_string(), 2)
    );
}

#[test]
fn test_blank_line_between_statements() {
    assert_eq!(render("a = 1\n\nb = 2\n"), "(GROUP (= a 1) (= b 2))");
    assert_eq!(render("a = 1\n\n"), "(= a 1)");
    assert_eq!(render("\n\na = 1\n"), "(= a 1)");
    assert_eq!(render("if a start\n\nb = 1\n\nend\n"), "(if a (= b 1))");

    // Lines are still counted across the blank ones
    assert_eq!(error_of("a = 1\n\n\nb +\n"), ("PositionError".to_string(), 4));
}

#[test]
fn test_empty_statement_between_statements() {
    let mut tokens = lex("a = 1\nb = 2\n");
    let mut separator = tokens[3].clone();
    separator.position.0 = 2;
    tokens.insert(4, separator);

    let error = parse(&tokens, &OperatorTable::builtin()).unwrap_err();
    assert_eq!(error.get_error_name(), "EmptyInputError");
    assert_eq!(error.get_position().line(), 2);
}

#[test]
fn test_errors_in_body_report_their_line() {
    assert_eq!(
        error_of("if a start\nb = 1\nc +\nend\n"),
        ("PositionError".to_string(), 3)
    );
}

#[test]
fn test_recursion_limit() {
    let tokens = lex("a + b + c + d\n");

    let error = Parser::new(OperatorTable::builtin())
        .with_max_depth(3)
        .parse(&tokens)
        .unwrap_err();
    assert_eq!(error.get_error_name(), "RecursionLimitError");

    let mut parser = Parser::new(OperatorTable::builtin());
    assert!(parser.parse(&tokens).is_ok());
    // The parser can be reused
    assert!(parser.parse(&tokens).is_ok());
}

#[test]
fn test_custom_operator_table() {
    let table = [
        ("+", Operator::binary(1)),
        ("*", Operator::binary(1)),
    ]
    .into_iter()
    .collect::<OperatorTable>();
    let tokens = tokenize("a * b + c".to_string(), None, &table).unwrap();

    assert_eq!(parse(&tokens, &table).unwrap().to_string(), "(* a (+ b c))");
}

#[test]
fn test_builtin_operator_table() {
    let table = OperatorTable::builtin();

    assert_eq!(table.len(), 20);
    assert_eq!(table.get("print"), Some(&Operator::unary(0)));
    assert_eq!(table.get("*").map(|operator| operator.arity), Some(Arity::Binary));
    assert!(table.get("+").unwrap().precedence < table.get("*").unwrap().precedence);
    assert!(!table.contains("start"));
    assert!(OperatorTable::new().is_empty());
}
