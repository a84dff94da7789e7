//! Bank Teller Library
//! # Overview
//!
//! This library provides the domain core of a console-driven
//! personal-banking ledger: customer accounts (checking or savings),
//! deposits and withdrawals, and an ordered customer registry, plus the
//! surfaces that drive it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Customer, BankError)
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - The ordered customer registry
//!   - [`core::validation`] - Pure validators (account type, national
//!     identifier, monetary amounts)
//! - [`io`] - Batch-file handling (CSV operations in, balance sheet out)
//! - [`console`] - The interactive teller session
//! - [`cli`] - CLI argument parsing
//!
//! # Account Rules
//!
//! - **Checking**: minimum opening deposit 100.00; withdrawals down to 0
//! - **Savings**: minimum opening deposit 50.00; withdrawals down to 0
//! - Balances are never negative; any operation that would break that is
//!   rejected with the balance unchanged
//!
//! # Error Handling
//!
//! Every core operation returns a typed [`BankError`] to its caller; the
//! core performs no user-facing I/O. The console and the batch runner
//! translate errors into operator-visible messages and drive retry loops.

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod types;

pub use console::Console;
pub use core::validation::{normalize_national_id, parse_account_type, parse_amount};
pub use core::Bank;
pub use io::{process_batch, write_balances_csv, BatchReader, Operation};
pub use types::{Account, AccountKind, BankError, Customer};
