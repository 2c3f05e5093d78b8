extern crate clap;

mod repl;

use std::{collections::HashSet, io, path::PathBuf, process::ExitCode, time::Instant};

use brainwalk::{
    interpreter::{ast_interpreter::AstInterpreter, EofPolicy, Runtime, RuntimeError},
    lexer::lexer::Lexer,
    parser::parser::Parser as AstParser,
};
use clap::{Parser, ValueEnum};
use colored::Colorize;

/// Brainf**k tree walking interpreter, starts a REPL when no files are given
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Program files, concatenated in order
    #[arg()]
    files: Vec<PathBuf>,

    /// Dump intermediate forms to stderr before running
    #[arg(long, value_enum, requires = "files")]
    dump: Vec<Dump>,

    /// What `,` does once input runs out
    #[arg(long, value_enum, default_value_t = EofPolicy::Zero)]
    eof: EofPolicy,

    /// Print the tape to stderr once the program finishes
    #[arg(short, long, requires = "files")]
    debug: bool,

    /// Report each stage and its timing on stderr
    #[arg(short, long, requires = "files")]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Dump {
    /// Output the lexer
    Tokens,
    /// Output the ast
    Ast,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result: Result<(), brainwalk::Error> = if args.files.is_empty() {
        repl::main(args.eof).map_err(|e| RuntimeError::from(e).into())
    } else {
        run_files(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn status(verbose: bool, message: impl std::fmt::Display) {
    if verbose {
        eprintln!("{}", message);
    }
}

fn run_files(args: &Args) -> Result<(), brainwalk::Error> {
    let dumps: HashSet<Dump> = args.dump.iter().cloned().collect();

    let mut text = String::new();
    for file in args.files.iter() {
        status(args.verbose, format!("Running {}", file.display()));
        let bytes = std::fs::read(file).map_err(RuntimeError::from)?;
        text.push_str(&String::from_utf8_lossy(&bytes));
    }

    status(args.verbose, "Starting lexing".blue());
    let now = Instant::now();
    let tokens = Lexer::new(&text).collect();
    status(
        args.verbose,
        format!("{} {:.2?}", "Finished lexing in".green(), now.elapsed()),
    );

    if dumps.contains(&Dump::Tokens) {
        for token in tokens.iter() {
            eprint!("{}", token.kind.as_str());
        }
        eprintln!();
    }

    status(args.verbose, "Starting parsing".blue());
    let mut now = Instant::now();
    let program = AstParser::new(&tokens).parse_program()?;
    status(
        args.verbose,
        format!("{} {:.2?}", "Finished parsing in".green(), now.elapsed()),
    );

    if dumps.contains(&Dump::Ast) {
        eprintln!("{:#?}", program);
    }

    let mut runtime =
        Runtime::new(Box::new(io::stdin()), Box::new(io::stdout())).with_eof_policy(args.eof);

    status(args.verbose, "Starting ast-interpreter".blue());
    now = Instant::now();
    let result = AstInterpreter::new().interpret(&mut runtime, &program);
    status(
        args.verbose,
        format!(
            "{} {:.2?}",
            "Finished ast-interpreter in".green(),
            now.elapsed()
        ),
    );

    if args.debug {
        eprintln!("{}", runtime.tape());
    }

    result?;
    Ok(())
}
