//! Interactive Pig
//!
//! Options: --timed, --time-limit, --player1, --player2, --seed, --verbose

use clap::Parser;
use pig::cli::{self, Args};

fn main() {
    let args = Args::parse();
    cli::log(args.verbose);
    if let Err(e) = cli::run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
