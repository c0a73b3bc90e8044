//! calc command-line interface.

use std::io;
use std::process::ExitCode;

use calc_diagnostic::{DiagnosticEmitter, TerminalEmitter};
use calc_eval::stdout_handler;
use calcc::{init_tracing, run_repl, CalcError, Session, SessionOptions};

struct Args {
    options: SessionOptions,
    quiet: bool,
    file: Option<String>,
}

enum Command {
    Run(Args),
    Help,
    Version,
}

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let args = match command {
        Command::Help => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("calc {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Command::Run(args) => args,
    };

    let mut session = Session::new(args.options, stdout_handler(), TerminalEmitter::stderr());
    let result = match &args.file {
        Some(path) => run_file(&mut session, path),
        None => run_repl(&mut session, io::stdin().lock(), !args.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported through the session's emitter.
        Err(CalcError::Fatal(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_file<E: DiagnosticEmitter>(session: &mut Session<E>, path: &str) -> Result<(), CalcError> {
    let source = std::fs::read_to_string(path).map_err(|source| CalcError::Read {
        path: path.to_owned(),
        source,
    })?;
    session.run_source(&source)
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut parsed = Args {
        options: SessionOptions::default(),
        quiet: false,
        file: None,
    };

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-d" | "--debug" => parsed.options.debug = true,
            "-q" | "--quiet" => parsed.quiet = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("unknown option '{flag}'"));
            }
            _ if parsed.file.is_some() => {
                return Err(format!("unexpected argument '{arg}'"));
            }
            // `-` reads standard input, as does no file at all.
            "-" => {}
            _ => parsed.file = Some(arg),
        }
    }

    Ok(Command::Run(parsed))
}

fn print_usage() {
    println!("calc - a small calculator language");
    println!();
    println!("Usage: calc [OPTIONS] [FILE]");
    println!();
    println!("Reads statements from FILE, or from standard input when FILE is");
    println!("omitted or '-'.");
    println!();
    println!("Options:");
    println!("  -d, --debug      Print each statement's tree before evaluating it");
    println!("  -q, --quiet      Do not show the '> ' prompt");
    println!("  -h, --help       Print this help");
    println!("  -V, --version    Print version");
    println!();
    println!("Environment:");
    println!("  CALC_LOG         Tracing filter (falls back to RUST_LOG)");
}
