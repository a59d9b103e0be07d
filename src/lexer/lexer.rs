use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::lookups::OperatorTable,
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

const WORD_PATTERN: &str = "^[a-zA-Z_][a-zA-Z0-9_]*";

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Rc<Vec<RegexPattern>>,
    operators: OperatorTable,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>, operators: &OperatorTable) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut patterns = vec![
            RegexPattern { regex: Regex::new(WORD_PATTERN).unwrap(), handler: symbol_handler },
            RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
            RegexPattern { regex: Regex::new("^\\n").unwrap(), handler: linebreak_handler },
            RegexPattern { regex: Regex::new("^[ \\t\\r]+").unwrap(), handler: skip_handler },
            RegexPattern { regex: Regex::new("^\"(?:[^\"\\\\]|\\\\.)*\"").unwrap(), handler: string_handler },
            RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: skip_handler },
            RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Linebreak, ";") },
        ];

        if let Some(regex) = operator_regex(operators) {
            patterns.push(RegexPattern { regex, handler: operator_handler });
        }

        Lexer {
            patterns: Rc::new(patterns),
            operators: operators.clone(),
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

/// Builds one alternation over the symbolic operators of the table, longest
/// lexemes first so that `<=` wins over `<`. Word operators such as `print`
/// are picked up by the symbol handler instead.
fn operator_regex(operators: &OperatorTable) -> Option<Regex> {
    let word = Regex::new(&format!("{}$", WORD_PATTERN)).ok()?;

    let mut symbols = operators
        .lexemes()
        .filter(|lexeme| !lexeme.is_empty() && !word.is_match(lexeme))
        .collect::<Vec<&str>>();

    if symbols.is_empty() {
        return None;
    }

    symbols.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = symbols
        .iter()
        .map(|symbol| regex::escape(symbol))
        .collect::<Vec<String>>()
        .join("|");

    Regex::new(&format!("^(?:{})", alternation)).ok()
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = lexer.matched(&regex);
    let position = lexer.position();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, position));
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = lexer.matched(&regex).len();
    lexer.advance_n(matched);
}

/// Blank and comment-only lines collapse into the separator before them, and
/// leading ones produce nothing at all.
fn linebreak_handler(lexer: &mut Lexer, _regex: Regex) {
    let position = lexer.position();
    let follows_statement = lexer
        .tokens
        .last()
        .is_some_and(|token| token.kind != TokenKind::Linebreak);

    if follows_statement {
        lexer.push(MK_TOKEN!(TokenKind::Linebreak, String::from("\n"), position));
    }
    lexer.advance_n(1);
    lexer.line += 1;
}

fn operator_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = lexer.matched(&regex);
    let position = lexer.position();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Builtin, matched, position));
}

fn string_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = lexer.matched(&regex);
    let position = lexer.position();

    lexer.advance_n(matched.len());
    lexer.line += matched.matches('\n').count() as u32;

    let string_literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.peek() {
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            } else {
                result.push(ch);
            }
        } else {
            result.push(ch);
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result, position));
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let value = lexer.matched(&regex);
    let position = lexer.position();

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else if lexer.operators.contains(&value) {
        TokenKind::Builtin
    } else {
        TokenKind::Identifier
    };

    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, position));
}

/// Splits source text into tokens, classifying builtin operators with
/// `operators`. The result always ends in a single `EOF` token.
pub fn tokenize(
    source: String,
    file: Option<String>,
    operators: &OperatorTable,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file, operators);
    let patterns = Rc::clone(&lex.patterns);

    while !lex.at_eof() {
        let pattern = patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, pattern.regex.clone()),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string(),
                    },
                    lex.position(),
                ))
            }
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));
    Ok(lex.tokens)
}
