//! caesar - Caesar cipher stream filter

use std::io::{self, ErrorKind};
use std::process;

use record_groups::cipher::Cipher;
use record_groups::cli::{parse_or_exit, CaesarArgs};
use record_groups::error::EXIT_FAILURE;
use record_groups::progress::{init_logging, print_error_chain};

fn main() {
    let args: CaesarArgs = parse_or_exit();
    init_logging(args.verbose, false);

    if let Err(e) = run(&args) {
        print_error_chain(&e);
        process::exit(EXIT_FAILURE);
    }
}

fn run(args: &CaesarArgs) -> anyhow::Result<()> {
    let cipher = Cipher::new(args.shift);
    log::debug!("{:?} with shift {}", args.direction(), cipher.shift());

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cipher.transform_stream(stdin.lock(), stdout.lock(), args.direction()) {
        Ok(bytes) => {
            log::debug!("Processed {} bytes", bytes);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}
