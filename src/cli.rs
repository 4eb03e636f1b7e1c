use std::path::PathBuf;

use clap::Parser;

/// hexlist - print a firmware text dump with word addresses
#[derive(Parser, Debug)]
#[command(name = "hexlist")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "With no INPUT, reads firmware.hex from the current directory.")]
pub struct Cli {
    /// Document to list (overrides HEXLIST_INPUT and hexlist.toml)
    pub input: Option<PathBuf>,

    /// Emit one NDJSON object per line instead of text
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of ./hexlist.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
