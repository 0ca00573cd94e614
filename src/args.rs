use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(version, about, author)]
pub struct Cli {
    /// Text to transform. Each must encode to exactly 16 bytes of UTF-8.
    /// Defaults to "abcdefghijklmnop" when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<OsString>,

    /// Transform COUNT random states instead of text.
    #[arg(
        short = 'r',
        long = "random",
        value_name = "COUNT",
        conflicts_with = "inputs"
    )]
    pub random: Option<usize>,

    /// Only print the state after the final round.
    #[arg(long = "final-only")]
    pub final_only: bool,
}
