//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed lexemes

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - The source position (line and file)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for a fixed lexeme.
///
/// The generated handler pushes a token of the given kind on the current
/// line and advances the lexer by the lexeme's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(";").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Linebreak, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            let position = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from($value), position));
            lexer.advance_n($value.len());
        }
    };
}
