mod args;

use args::Cli;
use clap::Parser;

use std::ffi::OsString;
use std::process::ExitCode;

use simpleaes::{DEFAULT_INPUT, State, Trace, Transform};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--random requires a COUNT of at least 1")]
    EmptyRandom,

    #[error(transparent)]
    SimpleAes(#[from] simpleaes::Error),
}

/// What gets printed above the round dumps of one trace.
enum Source {
    Text(String),
    Random,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match simpleaes_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn simpleaes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    // build every state up front so a bad input aborts before anything is printed
    let (sources, states) = match args.random {
        Some(0) => return Err(CliError::EmptyRandom),
        Some(count) => {
            let states = (0..count)
                .map(|_| State::random())
                .collect::<simpleaes::Result<Vec<_>>>()?;
            ((0..count).map(|_| Source::Random).collect(), states)
        }
        None => {
            let inputs = if args.inputs.is_empty() {
                vec![OsString::from(DEFAULT_INPUT)]
            } else {
                args.inputs
            };
            let states = inputs
                .iter()
                .map(|input| State::try_from_os_str(input))
                .collect::<simpleaes::Result<Vec<_>>>()?;
            // try_from_os_str has already rejected anything that is not UTF-8
            let sources = inputs
                .into_iter()
                .map(|input| Source::Text(input.to_string_lossy().into_owned()))
                .collect::<Vec<_>>();
            (sources, states)
        }
    };

    let traces = Transform::new().run_batch(&states);

    for (source, trace) in sources.iter().zip(&traces) {
        if args.final_only {
            print!("{}", trace.final_state());
            println!();
        } else {
            print_trace(source, trace);
        }
    }

    Ok(())
}

fn print_trace(source: &Source, trace: &Trace) {
    println!("The plaintext is:");
    println!("input bytes: ");
    println!("{}", trace.initial().column_hex());
    match source {
        Source::Text(text) => {
            for c in text.chars() {
                print!("{c} ");
            }
        }
        Source::Random => print!("(random)"),
    }
    println!("\n------------------------------------");
    for (i, state) in trace.rounds().iter().enumerate() {
        println!("After {} round(s), the state is", i + 1);
        println!("{state}");
    }
}
