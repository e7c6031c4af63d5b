//! letterfreq - letter frequency stream filter

use std::io::{self, ErrorKind};
use std::process;

use anyhow::Context;
use record_groups::cli::{parse_or_exit, FreqArgs};
use record_groups::error::EXIT_FAILURE;
use record_groups::freq::LetterCounts;
use record_groups::progress::{init_logging, print_error_chain};

fn main() {
    let args: FreqArgs = parse_or_exit();
    init_logging(args.verbose, false);

    if let Err(e) = run() {
        print_error_chain(&e);
        process::exit(EXIT_FAILURE);
    }
}

fn run() -> anyhow::Result<()> {
    let counts = LetterCounts::count_stream(io::stdin().lock()).context("failed to read stdin")?;
    log::debug!("Counted {} letters", counts.total());

    match counts.write_report(io::stdout().lock()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write report"),
    }
}
