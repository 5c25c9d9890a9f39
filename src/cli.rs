extern crate clap;

use std::path::PathBuf;

use clap::Parser;
use vesum::{writer::OutputFormat, PartOfSpeech};

pub const USAGE: &str = "Usage: vesum-table <adj|noun|verb> <filename>";

#[derive(Debug, Parser)]
#[command(
    name = "vesum-table",
    version,
    about = "Converts a VESUM dictionary into an inflection table."
)]
pub struct Cli {
    /// Part of speech to extract: adj, noun or verb.
    pub part_of_speech: PartOfSpeech,

    /// VESUM dictionary file.
    pub input: PathBuf,

    /// Output format: text or json.
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,
}
