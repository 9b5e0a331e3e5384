//! corec - a command-line interpreter for the Core teaching language.
//!
//! Sequences tokenize -> parse -> pretty-print -> execute over a program
//! file and a data file, translating any pipeline error into a process
//! exit code and a diagnostic on standard error (`SPEC_FULL.md` §6/§7).

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use core_util::Diagnostic;

/// corec - tokenize, parse, pretty-print, and execute a Core program.
#[derive(Parser, Debug)]
#[command(name = "corec")]
#[command(author = "Core Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the Core teaching language", long_about = None)]
struct Cli {
    /// Path to the Core program source file.
    program: PathBuf,

    /// Path to the data file supplying `read` values.
    data: PathBuf,

    /// Raise logging verbosity to debug.
    #[arg(short, long, env = "COREC_VERBOSE")]
    verbose: bool,

    /// Suppress the pretty-print prefix on stdout.
    #[arg(long)]
    no_print: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error! Failed to load configuration: {err}");
            return ExitCode::from(1);
        }
    };

    let verbose = cli.verbose || config.verbose;
    if let Err(err) = init_logging(verbose) {
        eprintln!("Error! Failed to initialize logging: {err}");
        return ExitCode::from(1);
    }

    let print_prefix = config.print_prefix && !cli.no_print;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match corec::run_files(&cli.program, &cli.data, print_prefix, &mut handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            use std::io::Write;
            let _ = handle.flush();
            eprintln!("{}", Diagnostic::from_error(&err));
            tracing::error!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry().with(filter).with(subscriber).try_init()?;
    Ok(())
}
