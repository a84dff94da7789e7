//! Batch processing pipeline
//!
//! Applies a CSV file of operations to a fresh in-memory bank and writes
//! the final balance sheet to the caller's output. Orchestration only:
//! parsing lives in `batch_reader`/`csv_format`, account rules in the
//! domain types.
//!
//! # Error Handling
//!
//! Fatal errors (unreadable file) are returned immediately. Individual
//! operation failures are reported on stderr and processing continues, so
//! one bad row never poisons the rest of the run.

use crate::core::Bank;
use crate::io::batch_reader::BatchReader;
use crate::io::csv_format::{write_balances_csv, Operation};
use crate::types::{Account, BankError, Customer};
use std::io::Write;
use std::path::Path;

/// Apply a single operation to the bank
///
/// # Arguments
///
/// * `bank` - The registry to mutate
/// * `operation` - The operation to apply
///
/// # Returns
///
/// * `Ok(())` if the operation was applied
/// * `Err(BankError)` if the account or registry rejected it; the bank is
///   unchanged
pub fn apply_operation(bank: &mut Bank, operation: Operation) -> Result<(), BankError> {
    match operation {
        Operation::Open {
            first_name,
            last_name,
            national_id,
            kind,
            initial_deposit,
        } => {
            let account = Account::open(kind, initial_deposit)?;
            bank.add_customer(Customer::new(first_name, last_name, national_id, account));
            Ok(())
        }
        Operation::Deposit { customer, amount } => bank
            .customer_at_mut(customer)?
            .account_mut()
            .deposit(amount),
        Operation::Withdraw { customer, amount } => bank
            .customer_at_mut(customer)?
            .account_mut()
            .withdraw(amount),
    }
}

/// Process a batch file and write the final balance sheet
///
/// This function orchestrates the complete batch pipeline:
/// 1. Creates a BatchReader to stream operations from the CSV file
/// 2. Applies each operation to a fresh Bank
/// 3. Writes the final balance sheet to `output`
///
/// # Arguments
///
/// * `input_path` - Path to the batch CSV file
/// * `output` - Mutable reference to a writer for the balance sheet
///
/// # Returns
///
/// * `Ok(())` if processing completed
/// * `Err(BankError)` if a fatal error occurred (unreadable input, output
///   write failure)
///
/// # Error Handling
///
/// Individual row failures (malformed rows, validator rejections, account
/// rule violations) are reported on stderr and processing continues.
pub fn process_batch(input_path: &Path, output: &mut dyn Write) -> Result<(), BankError> {
    let mut bank = Bank::new();

    let reader = BatchReader::new(input_path)?;

    for result in reader {
        if let Err(e) = result.and_then(|operation| apply_operation(&mut bank, operation)) {
            eprintln!("Batch operation error: {}", e);
        }
    }

    write_balances_csv(&bank, output)
}
