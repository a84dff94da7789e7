use clap::Parser;
use std::path::PathBuf;

/// Console-driven personal-banking ledger
#[derive(Parser, Debug)]
#[command(name = "bank-teller")]
#[command(about = "Console-driven personal-banking ledger", long_about = None)]
pub struct CliArgs {
    /// Batch file of operations to apply instead of running interactively
    #[arg(
        long = "batch",
        value_name = "FILE",
        help = "Apply a CSV file of operations and print the balance sheet to stdout"
    )]
    pub batch: Option<PathBuf>,
}
