use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use blocktree::{
    display_error, lexer::lexer::tokenize, parser::lookups::OperatorTable,
    parser::parser::parse, pretty_print,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (file_path, show_tokens) = match args.as_slice() {
        [_, file] => (file, false),
        [_, file, flag] if flag == "--tokens" => (file, true),
        _ => {
            eprintln!("usage: blocktree <file> [--tokens]");
            process::exit(2);
        }
    };

    let file = PathBuf::from(file_path);
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.clone());

    let file_contents = match read_to_string(&file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file.display(), error);
            process::exit(1);
        }
    };

    let operators = OperatorTable::builtin();
    let start = Instant::now();

    let tokens = match tokenize(file_contents, Some(file_name), &operators) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file);
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if show_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let tree = match parse(&tokens, &operators) {
        Ok(tree) => tree,
        Err(error) => {
            display_error(&error, &file);
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    println!("{}", pretty_print(&tree.to_string()));
}
