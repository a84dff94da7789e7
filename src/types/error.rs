//! Error types for the bank teller core
//!
//! This module defines all error types that core operations can report.
//! Errors are designed to be descriptive so the presentation layer can show
//! them to the operator verbatim.
//!
//! # Error Categories
//!
//! - **Validation Errors**: invalid account type, malformed national
//!   identifier, unparseable or non-positive amounts
//! - **Account Errors**: opening deposit below the minimum, insufficient
//!   funds, arithmetic overflow in balance calculations
//! - **Registry Errors**: customer index outside the registered range
//! - **Batch I/O Errors**: unreadable batch files, malformed CSV rows

use crate::types::account::AccountKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank teller core
///
/// This enum represents all possible failures the core can report. Each
/// variant includes relevant context to help the caller explain the failure
/// or choose different input. The core never prints these itself; the
/// console and the batch runner translate them for the operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Account-type selection did not match an offered variant
    ///
    /// Only "checking" and "savings" are accepted (case-insensitive).
    /// This is a recoverable error - the caller re-prompts.
    #[error("Invalid account type '{input}': expected 'checking' or 'savings'")]
    InvalidAccountType {
        /// The rejected selection, as entered
        input: String,
    },

    /// Opening deposit is below the minimum for the account type
    ///
    /// Checking accounts require 100.00, savings accounts 50.00.
    /// This is a recoverable error - no account is constructed.
    #[error("{kind} accounts require a minimum opening deposit of ${minimum:.2}, got ${deposit:.2}")]
    BelowMinimum {
        /// The account type being opened
        kind: AccountKind,
        /// The minimum opening deposit for that type
        minimum: Decimal,
        /// The deposit that was offered
        deposit: Decimal,
    },

    /// National identifier does not match the required format
    ///
    /// Identifiers are 9 digits, optionally grouped DDD-DD-DDDD, with the
    /// excluded patterns rejected (area 000/666/9xx, group 00, serial 0000).
    /// This is a recoverable error - the caller re-prompts, no partial
    /// state is kept.
    #[error("Invalid national identifier '{input}': expected 9 digits as DDD-DD-DDDD")]
    InvalidFormat {
        /// The rejected identifier, as entered
        input: String,
    },

    /// Monetary amount is non-positive or not a number
    ///
    /// This is a recoverable error - the balance is unchanged.
    #[error("Invalid amount '{amount}': must be a positive number")]
    InvalidAmount {
        /// The rejected amount, as entered or as computed
        amount: String,
    },

    /// Withdrawal exceeds the available balance
    ///
    /// This is a recoverable error - the withdrawal is rejected and the
    /// balance remains unchanged.
    #[error("Insufficient funds: available ${available:.2}, requested ${requested:.2}")]
    InsufficientFunds {
        /// Current account balance
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Customer index outside the registered range
    ///
    /// This is a recoverable error - the caller selects again.
    #[error("Customer index {index} is out of range (bank has {count} customers)")]
    IndexOutOfRange {
        /// The rejected 0-based index
        index: usize,
        /// Number of registered customers
        count: usize,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to maintain
    /// balance integrity.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// I/O error occurred while reading a batch file
    ///
    /// This is typically fatal to the batch run (file permissions, disk
    /// errors, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred in a batch file
    ///
    /// This is a recoverable error - the malformed row is skipped and
    /// processing continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankError
impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAccountType error
    pub fn invalid_account_type(input: &str) -> Self {
        BankError::InvalidAccountType {
            input: input.to_string(),
        }
    }

    /// Create a BelowMinimum error
    pub fn below_minimum(kind: AccountKind, minimum: Decimal, deposit: Decimal) -> Self {
        BankError::BelowMinimum {
            kind,
            minimum,
            deposit,
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(input: &str) -> Self {
        BankError::InvalidFormat {
            input: input.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        BankError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an IndexOutOfRange error
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        BankError::IndexOutOfRange { index, count }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}
