use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use shunt::{Error, RuntimeError, Value, evaluate, no_variables, preprocess};
use tracing_subscriber::EnvFilter;

/// shunt evaluates arithmetic, comparison, bitwise and logical expressions
/// over integers, floats and booleans.
///
/// Without expressions on the command line, shunt reads one expression per
/// line from standard input until an empty line or the end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Defines a variable, for example `-d rate=0.25`. The value may be any
    /// expression without variables. Can be repeated.
    #[arg(short, long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    define: Vec<(String, Value)>,

    /// Value used for every variable that is not defined. Without it,
    /// undefined variables are an error.
    #[arg(long, value_name = "VALUE", value_parser = parse_constant)]
    default: Option<Value>,

    /// Logs every pipeline stage. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    expressions: Vec<String>,
}

fn parse_constant(text: &str) -> Result<Value, String> {
    evaluate(text, no_variables).map_err(|e| e.to_string())
}

fn parse_definition(text: &str) -> Result<(String, Value), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let name = preprocess(name);
    if name.is_empty() {
        return Err(format!("missing variable name in '{text}'"));
    }
    Ok((name, parse_constant(value)?))
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Prints the interactive prompt and makes sure it is visible before input
/// is read.
fn prompt(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Enter one expression per line; an empty line quits.")?;
    out.flush()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let variables: HashMap<String, Value> = args.define.into_iter().collect();
    let default = args.default;
    let lookup = |name: &str| -> Result<Value, Error> {
        variables.get(name)
                 .copied()
                 .or(default)
                 .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() }.into())
    };

    let run = |expression: &str| match evaluate(expression, &lookup) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    };

    let mut failed = false;

    if args.expressions.is_empty() {
        if let Err(e) = prompt(&mut io::stdout()) {
            eprintln!("Failed to write to standard output: {e}");
            failed = true;
        }

        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                eprintln!("Failed to read from standard input.");
                failed = true;
                break;
            };
            if line.trim().is_empty() {
                break;
            }
            failed |= !run(&line);
        }
    } else {
        for expression in &args.expressions {
            failed |= !run(expression);
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::prompt;

    struct Unflushable(Vec<u8>);

    impl Write for Unflushable {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn prompt_reports_flush_failures() {
        let mut out = Unflushable(Vec::new());

        assert_eq!(prompt(&mut out).map_err(|e| e.kind()), Err(io::ErrorKind::BrokenPipe));
        assert!(out.0.starts_with(b"Enter one expression"));
    }

    #[test]
    fn prompt_is_written_and_flushed() {
        let mut out = Vec::new();

        assert!(prompt(&mut out).is_ok());
        assert_eq!(out, b"Enter one expression per line; an empty line quits.\n");
    }
}
