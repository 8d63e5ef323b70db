use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

/// Installs the stderr log subscriber.
///
/// `KINSHIP_LOG` takes an `EnvFilter` directive and wins over the flags.
/// `KINSHIP_LOG_FORMAT=json` switches to one JSON object per event.
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env("KINSHIP_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "debug"
        } else if quiet {
            "error"
        } else {
            "warn"
        })
    });

    let format = env::var("KINSHIP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_owned());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Reads and parses the family document named by `source`.
fn load(source: &PathOrStdin, max_size: u64) -> Result<kinship_core::FamilyFile, CliError> {
    let text = io::read_input(source, max_size)?;
    kinship_core::parse_family(&text).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let max = cli.max_file_size;
    match &cli.command {
        Command::Relate { file, a, b, .. } => {
            let family = load(file, max)?;
            match b {
                Some(b) => cmd::relate::run(&family, a, b, &cli.format),
                None => cmd::relate::run_all(&family, a, &cli.format),
            }
        }
        Command::Path { file, from, to } => {
            let family = load(file, max)?;
            cmd::path::run(&family, from, to, &cli.format)
        }
        Command::Ancestors { file, id } => {
            let family = load(file, max)?;
            cmd::ancestors::run(&family, id, &cli.format)
        }
        Command::Relatives {
            file,
            id,
            include_unrelated,
        } => {
            let family = load(file, max)?;
            cmd::relatives::run(&family, id, *include_unrelated, &cli.format)
        }
        Command::Inspect { file } => {
            let family = load(file, max)?;
            cmd::inspect::run(&family, &cli.format)
        }
        Command::Complete { file } => {
            let family = load(file, max)?;
            cmd::complete::run(&family, &cli.format, cli.quiet)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.message());
            ExitCode::from(e.exit_code())
        }
    }
}
