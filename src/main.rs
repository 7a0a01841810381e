use std::{fs, path::PathBuf, process, time::Instant};

use clap::Parser;

use quanta::{display_error, lexer::lexer::tokenize, parser::parser::parse_source};

#[derive(Parser)]
#[command(name = "quanta")]
#[command(about = "Parses the type declarations of a source file", version)]
struct Cli {
    /// Source file to parse
    input: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Do not print the parsed declarations
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let file_name = cli.input.display().to_string();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_name, error);
            process::exit(1);
        }
    };

    if cli.tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
    }

    let start = Instant::now();
    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", error);
            display_error(&error, &source, &file_name);
            process::exit(1);
        }
    };

    log::info!("parsed {} in {:?}", file_name, start.elapsed());

    if !cli.quiet {
        print!("{}", program);
    }
}
