use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use sugod::{check, error::Error, interpreter::evaluator::input::StdinInput, run_with_input};
use tracing_subscriber::EnvFilter;

/// sugod runs programs written in a small teaching language with Cebuano
/// keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sugod to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Only scan and parse the program, reporting every syntax error found.
    #[arg(short, long)]
    check: bool,

    /// Log filter for diagnostics on standard error, such as `debug` or
    /// `sugod=trace`.
    #[arg(long, env = "SUGOD_LOG", default_value = "warn")]
    log_level: String,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&args.log_level))
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.check {
        return match check(&script) {
            Ok(()) => ExitCode::SUCCESS,
            Err(errors) => {
                for error in &errors {
                    report(error);
                }
                ExitCode::FAILURE
            },
        };
    }

    match run_with_input(&script, StdinInput) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            print!("{}", error.partial_output());
            // Partial output must land before the diagnostic.
            if let Err(e) = io::stdout().flush() {
                tracing::warn!(error = %e, "failed to flush standard output");
            }
            report(&error);
            ExitCode::FAILURE
        },
    }
}

fn report(error: &Error) {
    eprintln!("{}: {error}", error.category());
}
