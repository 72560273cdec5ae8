use clap::Parser;
use std::{fs, process};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YALCC source file
    input_path: String,

    /// Run the lexer only and dump the token stream
    #[arg(short, long)]
    lex: bool,

    /// Run the lexer and parser only and dump the AST
    #[arg(short, long)]
    parse: bool,
}

fn main() {
    let args = Args::parse();

    // --lex: stop after lexing
    // --parse: stop after parsing
    // no option: run the full pipeline and write the module to stdout

    let source = match fs::read_to_string(&args.input_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error reading '{}': {}", args.input_path, error);
            process::exit(1);
        }
    };

    let tokens = match lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    };

    if args.lex {
        for token in &tokens {
            println!("{token:?}");
        }
        return;
    }

    let program = match parser::parse_tokens(&tokens) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    };

    if args.parse {
        println!("{program:#?}");
        return;
    }

    print!("{}", ir::emit(&program));
}
