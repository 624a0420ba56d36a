//! `ulink-header`: encode a uProtocol link header from the command line.
//!
//! Prints the header as hex, followed by its length and the total message
//! size reserved for the given payload size. Set `RUST_LOG=debug` to see each
//! entry as it is written.

mod args;
mod error;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use ulink_proto::{HeaderBuilder, estimate};

use crate::{args::Args, error::CliError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "ulink-header failed");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let attrs = args.attributes()?;
    let config = args.config();

    let header = HeaderBuilder::with_config(config.clone()).build(&attrs)?;
    let total = estimate(&attrs, args.payload_size, &config)?;

    writeln!(out, "{}", hex::encode(&header))?;
    writeln!(out, "header_len: {}", header.len())?;
    writeln!(out, "estimate: {total} (payload {})", args.payload_size)?;
    Ok(())
}
