//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account variants and balance rules
//! - `customer`: Customer identity records
//! - `error`: Error types for the bank teller core

pub mod account;
pub mod customer;
pub mod error;

pub use account::{Account, AccountKind};
pub use customer::Customer;
pub use error::BankError;
