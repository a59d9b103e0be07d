use std::{collections::HashMap, fmt::Display};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}

/// Metadata of a builtin operator.
///
/// A smaller `precedence` binds looser, so the operator ends up closer to
/// the root of its expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Operator {
    pub arity: Arity,
    pub precedence: u32,
}

impl Operator {
    pub fn unary(precedence: u32) -> Self {
        Operator {
            arity: Arity::Unary,
            precedence,
        }
    }

    pub fn binary(precedence: u32) -> Self {
        Operator {
            arity: Arity::Binary,
            precedence,
        }
    }
}

/// Immutable mapping from an operator's lexeme to its arity and precedence.
///
/// Shared by the lexer, which uses it to classify builtin tokens, and the
/// parser, which uses it to pick the root of each expression.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    operators: HashMap<String, Operator>,
}

impl OperatorTable {
    pub fn new() -> Self {
        OperatorTable {
            operators: HashMap::new(),
        }
    }

    pub fn insert(&mut self, lexeme: &str, operator: Operator) {
        self.operators.insert(String::from(lexeme), operator);
    }

    pub fn get(&self, lexeme: &str) -> Option<&Operator> {
        self.operators.get(lexeme)
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.operators.contains_key(lexeme)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn lexemes(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// The builtin operators of the scripting language.
    pub fn builtin() -> Self {
        let mut table = OperatorTable::new();
        create_operator_lookups(&mut table);
        table
    }
}

impl<'a> FromIterator<(&'a str, Operator)> for OperatorTable {
    fn from_iter<T: IntoIterator<Item = (&'a str, Operator)>>(iter: T) -> Self {
        let mut table = OperatorTable::new();
        for (lexeme, operator) in iter {
            table.insert(lexeme, operator);
        }
        table
    }
}

pub fn create_operator_lookups(table: &mut OperatorTable) {
    // Assignment and statement-level operators
    table.insert("=", Operator::binary(0));
    table.insert("print", Operator::unary(0));
    table.insert("return", Operator::unary(0));

    // Logical
    table.insert("or", Operator::binary(1));
    table.insert("||", Operator::binary(1));
    table.insert("and", Operator::binary(2));
    table.insert("&&", Operator::binary(2));

    // Relational
    table.insert("==", Operator::binary(3));
    table.insert("!=", Operator::binary(3));
    table.insert("<", Operator::binary(3));
    table.insert("<=", Operator::binary(3));
    table.insert(">", Operator::binary(3));
    table.insert(">=", Operator::binary(3));

    // Additive and multiplicative
    table.insert("+", Operator::binary(4));
    table.insert("-", Operator::binary(4));
    table.insert("*", Operator::binary(5));
    table.insert("/", Operator::binary(5));
    table.insert("%", Operator::binary(5));

    // Negation
    table.insert("not", Operator::unary(6));
    table.insert("!", Operator::unary(6));
}
