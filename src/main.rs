//! Command-line tool entry point.

#![deny(missing_docs)]

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod local;
mod policy;
mod upstream;
mod version;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = match cli::interpret(std::env::args().skip(1)) {
        Ok(cli::Invocation::Help) => {
            println!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Ok(cli::Invocation::Run(opts)) => opts,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            let _ = err.print();
            println!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let source = match upstream::github::Source::new() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let result =
        cmd::update::execute(&opts, &source, &mut stdin.lock(), &mut io::stdout()).await;

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, "update finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::FAILURE
        }
    }
}
