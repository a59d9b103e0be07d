#![allow(clippy::module_inception)]

use std::{fs, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based source line together with the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn line(&self) -> u32 {
        self.0
    }
}

/// Returns the text of a 1-based line, without its line terminator.
///
/// `None` when the file cannot be read or is shorter than `line`.
pub fn get_source_line(file: &Path, line: u32) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;
    let index = (line as usize).checked_sub(1)?;

    content
        .lines()
        .nth(index)
        .map(|text| text.trim_end_matches('\r').to_string())
}


pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: UnclosedBlockError (every `start` needs a matching `end`)
        -> script.bt
           |
        20 | while x < 10 start
           |
    */

    let line = error.get_position().line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    if let Some(line_text) = get_source_line(file, line) {
        println!("{} | {}", line_string, line_text.trim());
    } else {
        println!("{} | <{}>", line_string, error);
    }

    println!("{:>padding$}", "|");
}

/// Breaks an S-expression over several lines, one nested node per line.
/// Parentheses inside string terminals are left alone.
pub fn pretty_print(tree: &str) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for c in tree.chars() {
        if in_string {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '(' if !result.is_empty() => {
                indent += 1;
                // Replace the separating space with a newline
                if result.ends_with(' ') {
                    result.pop();
                }
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ')' => {
                indent = indent.saturating_sub(1);
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
