//! dealerdb entry point
//!
//! A minimal entrypoint that parses CLI arguments, boots the server and
//! exits non-zero on failure. All logic lives in the CLI module.

use dealerdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
