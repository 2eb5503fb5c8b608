// c0front: C0 front-end driver

use std::fs;
use std::path::Path;
use std::process;

use c0front::parser::lexer::Lexer;
use c0front::parser::parse::Parser;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens] <file.c0>", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tokens    dump the token stream instead of parsing");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("c0front");

    let mut dump_tokens = false;
    let mut file = None;
    for arg in &args[1..] {
        if arg == "--tokens" {
            dump_tokens = true;
        } else {
            file = Some(arg.as_str());
        }
    }

    let file = match file {
        Some(file) => file,
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            usage(program_name);
            process::exit(1);
        }
    };

    if !Path::new(file).exists() {
        eprintln!("Error: File '{}' not found", file);
        usage(program_name);
        process::exit(1);
    }

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Failed to read '{}': {}", file, err);
            process::exit(1);
        }
    };

    if dump_tokens {
        let mut lexer = Lexer::from_source(&source);
        loop {
            let token = lexer.next_token();
            println!(
                "{:>4}:{:<4} {}",
                token.location.line, token.location.column, token
            );
            if token.is_eof() {
                break;
            }
        }
        for diag in lexer.diagnostics() {
            eprintln!("{}", diag.render(&source));
        }
        if !lexer.diagnostics().is_empty() {
            process::exit(1);
        }
        return;
    }

    let outcome = Parser::from_source(&source).parse();

    for diag in &outcome.diagnostics {
        eprintln!("{}", diag.render(&source));
    }

    eprintln!(
        "Parsed {}: {} top-level declaration(s), {} diagnostic(s).",
        file,
        outcome.unit.declarations.len(),
        outcome.diagnostics.len()
    );

    if !outcome.diagnostics.is_empty() {
        process::exit(1);
    }
}
