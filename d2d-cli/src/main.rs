//! Entry point for the instance driver.
#![forbid(unsafe_code)]
#![expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]

use std::error::Error as _;

use d2d_cli::CliError;

fn main() {
    if let Err(err) = d2d_cli::init_logging() {
        eprintln!("d2d-instance: logging disabled: {err}");
    }
    match d2d_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("d2d-instance: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
