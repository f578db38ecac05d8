use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use mylang::{Evaluator, parse, value_to_string};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">> ";

/// mylang runs programs written in a small dynamically-typed scripting
/// language. Without arguments it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the given code instead of reading a file.
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "file")]
    code: Option<String>,

    /// Path of the script to run.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let script = match (args.code, args.file) {
        (Some(code), _) => code,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Failed to read the input file '{}': {error}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, None) => return repl(),
    };

    run_script(&script)
}

/// Logs go to stderr so that program output on stdout stays clean. The
/// filter comes from `MYLANG_LOG`, then `RUST_LOG`, and defaults to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("MYLANG_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                      .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run_script(script: &str) -> ExitCode {
    let (program, diagnostics) = parse(script);
    if !diagnostics.is_empty() {
        report_diagnostics(&diagnostics);
        return ExitCode::FAILURE;
    }

    let mut evaluator = Evaluator::new();
    if let Err(error) = evaluator.evaluate(&program) {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn report_diagnostics(diagnostics: &[String]) {
    eprintln!("Parse errors:");
    for diagnostic in diagnostics {
        eprintln!("  {diagnostic}");
    }
}

/// Reads one line at a time and evaluates it in a single session, so
/// definitions carry over between lines.
fn repl() -> ExitCode {
    println!("Welcome to mylang!");
    println!("Type expressions to evaluate. Type 'exit' to quit.\n");

    let mut evaluator = Evaluator::new();
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                eprintln!("Error: {error}");
                return ExitCode::FAILURE;
            },
            None => {
                println!();
                return ExitCode::SUCCESS;
            },
        };

        let input = line.trim();
        match input {
            "" => continue,
            "exit" | "quit" => {
                println!("Goodbye!");
                return ExitCode::SUCCESS;
            },
            _ => {},
        }

        let (program, diagnostics) = parse(input);
        if !diagnostics.is_empty() {
            report_diagnostics(&diagnostics);
            continue;
        }

        match evaluator.evaluate(&program) {
            Ok(value) => println!("{}", value_to_string(&value)),
            Err(error) => eprintln!("Error: {error}"),
        }
    }
}
