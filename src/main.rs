//! Transaction Report CLI
//!
//! Prints every report section for the built-in transactions to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run > report.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use std::env;
use std::io;
use std::process;
use transaction_report::{Ledger, ReportError, ReportGenerator, Result, Sequencing};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    if let Some(arg) = env::args().nth(1) {
        return Err(ReportError::UnexpectedArgument(arg));
    }

    let mut generator = ReportGenerator::new(Ledger::seed(), Sequencing::Snapshot);
    let report = generator.run();

    let stdout = io::stdout();
    let handle = stdout.lock();
    report.write_to(handle)?;

    Ok(())
}
