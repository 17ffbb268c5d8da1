// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::parsers::SpanArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_histogram",
    version = crate::VERSION,
    about = "Replace text regions with a histogram of their distinct lines",
    long_about = "Replace text regions with a histogram of their distinct lines.\n\n\
        Each region is rewritten as `count line` rows, most frequent first. \
        Empty lines are ignored and the region's own line ending (LF or CRLF) \
        is kept. Without --region the whole document is one region."
)]
pub struct Args {
    /// Document to transform (`-` or omitted reads standard input)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Byte range to transform, `START..END` or `START..` (repeatable, comma separated)
    #[arg(short, long = "region", value_name = "RANGE", value_delimiter = ',', help_heading = "Regions")]
    pub regions: Vec<SpanArg>,

    /// Rewrite FILE instead of printing the result
    #[arg(short, long, conflicts_with = "output", help_heading = "Output")]
    pub in_place: bool,

    /// Write the result to this path instead of standard output
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
