//! exprc - checks programs in a small typed expression language.

use std::{fs, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use exprc::{
    errors::{diagnostics::CallbackSink, errors::Error},
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::check_program,
};

#[derive(Parser, Debug)]
#[command(
    name = "exprc",
    version,
    about = "Type checker for a small typed expression language"
)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lex, parse and type check a source file
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Source file to check
    pub file: PathBuf,

    /// Print the annotated tree after checking
    #[arg(long)]
    pub emit_ast: bool,

    /// Only print the error count
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => check(args),
    };

    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the whole pipeline on one file and returns the number of semantic
/// errors reported.
fn check(args: CheckArgs) -> anyhow::Result<usize> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name.clone()))
        .map_err(|error| front_end_error(error, &source, &file_name))?;
    debug!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let mut program = parse(tokens, Rc::new(file_name.clone()))
        .map_err(|error| front_end_error(error, &source, &file_name))?;
    debug!(statements = program.statements.len(), elapsed = ?parse_start.elapsed(), "parsed");

    let mut errors = 0;
    {
        let mut sink = CallbackSink(|line: u32, message: &str| {
            errors += 1;
            if !args.quiet {
                println!("{}:{}: {}", file_name, line, message);
            }
        });
        check_program(&mut program, &mut sink);
    }
    info!(file = %file_name, errors, elapsed = ?start.elapsed(), "checked");

    if args.emit_ast {
        println!("{}", pretty_print(format!("{:?}", program)));
    }

    if errors > 0 {
        println!("{} error(s) found", errors);
    }

    Ok(errors)
}

/// Renders a lex or parse error against its source line and turns it into
/// the driver's error type.
fn front_end_error(error: Error, source: &str, file: &str) -> anyhow::Error {
    eprint!("{}", format_error(&error, source, file));
    anyhow!("{}", error)
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_check_command() {
        let cli = Cli::try_parse_from(["exprc", "check", "program.expr"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.file.to_str().unwrap(), "program.expr");
                assert!(!args.emit_ast);
                assert!(!args.quiet);
            }
        }
    }

    #[test]
    fn cli_parses_check_flags() {
        let cli = Cli::try_parse_from(["exprc", "check", "program.expr", "--emit-ast", "-q", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Check(args) => {
                assert!(args.emit_ast);
                assert!(args.quiet);
            }
        }
    }

    #[test]
    fn cli_requires_file() {
        assert!(Cli::try_parse_from(["exprc", "check"]).is_err());
    }

    #[test]
    fn cli_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn pretty_print_indents_nesting() {
        assert_eq!(pretty_print(String::from("A { b: 1 }")), "A {\n  b: 1 \n}");
        assert_eq!(pretty_print(String::from("f(x)")), "f(\n  x\n)");
    }
}
