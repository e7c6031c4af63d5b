//! groups - report tab-separated records that share a key
//!
//! Main entry point for the command-line application.

use std::io;
use std::process;

use record_groups::cli::{parse_or_exit, GroupsArgs};
use record_groups::error::EXIT_FAILURE;
use record_groups::processor::{Processor, ProcessorConfig};
use record_groups::progress::{format_number, print_error_chain, print_header, print_info, print_warning};
use record_groups::GroupsError;

fn main() {
    let args: GroupsArgs = parse_or_exit();

    record_groups::progress::init_logging(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        print_error_chain(&e);

        let code = e
            .downcast_ref::<GroupsError>()
            .map_or(EXIT_FAILURE, GroupsError::exit_code);
        process::exit(code);
    }
}

fn run(args: GroupsArgs) -> anyhow::Result<()> {
    let config = ProcessorConfig::from_args(&args);

    if args.verbose {
        print_config(&args, &config);
    }

    let processor = Processor::new(config);
    let stdout = io::stdout();
    let stats = processor.process(&args.input, stdout.lock())?;

    if stats.malformed_skipped > 0 && !args.quiet {
        print_warning(&format!(
            "Skipped {} malformed line(s)",
            format_number(stats.malformed_skipped)
        ));
    }

    if args.stats && !args.quiet {
        stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &GroupsArgs, config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Input:        {:?}", args.input));
    print_info(&format!("Index:        {:?}", config.index));
    print_info(&format!("On malformed: {:?}", config.on_malformed));
}
