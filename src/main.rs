//! Bank Teller CLI
//!
//! Console-driven personal-banking ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run                       # interactive teller session
//! cargo run -- --batch ops.csv > balances.csv
//! ```
//!
//! The interactive session drives a menu loop over stdin/stdout. Batch
//! mode applies the operations in the given CSV file to a fresh bank and
//! prints the final balance sheet to stdout; per-row failures are reported
//! on stderr and processing continues.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (batch file missing or unreadable, I/O failure)

use bank_teller::cli;
use bank_teller::io::process_batch;
use bank_teller::Console;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    match args.batch {
        Some(batch_path) => {
            // Batch mode: balance sheet goes to stdout
            let mut output = std::io::stdout();
            if let Err(e) = process_batch(&batch_path, &mut output) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        None => {
            // Interactive mode over locked stdin/stdout
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut console = Console::new(stdin.lock(), stdout.lock());
            if let Err(e) = console.run() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
