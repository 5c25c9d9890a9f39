extern crate clap;
extern crate tracing_subscriber;

mod cli;

use std::io::{self, BufWriter};

use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;
use vesum::{error::IoError, reader::EntryReader, Converter, Error};

use crate::cli::{Cli, USAGE};

fn main() -> Result<(), Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error
                .print()
                .map_err(|error| IoError::Writer(error.kind()))?;
            return Ok(());
        }
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    // Stdout carries the table, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let reader = EntryReader::open(&cli.input)?;
    let mut converter = Converter::new(cli.part_of_speech);
    converter.read_from(reader)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let rows = converter.write(&mut out, cli.format)?;

    tracing::debug!(rows, input = %cli.input.display(), "table written");

    Ok(())
}
