//! Command-line interface definitions
//!
//! Argument parsing for the `groups`, `caesar`, and `letterfreq` binaries.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

use crate::cipher::{Direction, DEFAULT_SHIFT};
use crate::error::EXIT_USAGE;

/// Report records that share a key
///
/// Reads tab-separated `key<TAB>value` lines and prints every key seen with
/// two or more values, sorted by key.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "groups",
    author = "m0h1nd4",
    version,
    about = "Report tab-separated records that share a key",
    long_about = r#"
Reads FILE, one `key<TAB>value` record per line, and prints every key that
appears with two or more values. Keys are printed in byte order, each followed
by its values in input order and a blank line.

EXAMPLES:
    # Group students by hometown
    groups students.tsv

    # Read from a pipe
    cut -f1,6 grades.tsv | groups -

    # Keep going past malformed lines
    groups --on-malformed skip messy.tsv
"#
)]
pub struct GroupsArgs {
    /// Input file, or `-` for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Index backend used while reading
    #[arg(long, value_enum, default_value_t = IndexKind::Hash)]
    pub index: IndexKind,

    /// What to do with a line that is not exactly two tab-separated fields
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Abort)]
    pub on_malformed: MalformedPolicy,

    /// Print run statistics to stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Show a progress bar while reading a file
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Quiet mode - errors only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Index backend for grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexKind {
    /// Hash table, sorted once before output
    Hash,
    /// Ordered tree, sorted on insert
    Ordered,
}

/// Handling of malformed input lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicy {
    /// Stop at the first malformed line and print nothing
    Abort,
    /// Warn, skip the line, and continue
    Skip,
}

/// Caesar cipher stream filter
///
/// Shifts ASCII letters read from stdin and writes the result to stdout.
/// Everything that is not an ASCII letter passes through unchanged.
#[derive(Parser, Debug, Clone)]
#[command(name = "caesar", author = "m0h1nd4", version, about = "Caesar cipher stream filter")]
pub struct CaesarArgs {
    /// Number of alphabet positions to shift (reduced modulo 26)
    #[arg(short = 'k', long, value_name = "N", default_value_t = DEFAULT_SHIFT, allow_negative_numbers = true)]
    pub shift: i64,

    /// Undo the shift instead of applying it
    #[arg(short, long, default_value_t = false)]
    pub decrypt: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CaesarArgs {
    pub fn direction(&self) -> Direction {
        if self.decrypt {
            Direction::Decrypt
        } else {
            Direction::Encrypt
        }
    }
}

/// Letter frequency stream filter
///
/// Counts ASCII letters read from stdin and prints the share of each letter.
#[derive(Parser, Debug, Clone)]
#[command(name = "letterfreq", author = "m0h1nd4", version, about = "Letter frequency stream filter")]
pub struct FreqArgs {
    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Parse the process arguments, exiting with the usage code on error.
///
/// `--help` and `--version` print to stdout and exit 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    }
}
