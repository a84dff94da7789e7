//! Customer registry
//!
//! This module provides the `Bank` struct which maintains the ordered
//! registry of customers and mediates all lookups and mutations.
//!
//! The Bank is responsible for:
//! - Registering new customers (append-only, insertion order preserved)
//! - Index-based lookup, stable for the lifetime of the process
//! - Handing out references into its own storage so that mutations made
//!   through any returned handle are visible to every later lookup
//!
//! The Bank never validates amounts itself; each account enforces its own
//! rules.

use crate::types::{BankError, Customer};

/// The in-memory registry of all customers
///
/// One instance per process, initialized empty, growing monotonically via
/// [`add_customer`](Bank::add_customer). There is no removal or reordering
/// operation, so index-based lookup is stable. Duplicate identities are
/// permitted; the registry enforces no uniqueness.
#[derive(Debug, Default)]
pub struct Bank {
    /// Registered customers in insertion order
    customers: Vec<Customer>,
}

impl Bank {
    /// Create a new Bank with no customers
    pub fn new() -> Self {
        Bank {
            customers: Vec::new(),
        }
    }

    /// Register a customer
    ///
    /// Appends to the ordered registry; always succeeds.
    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Look up a customer by 0-based index
    ///
    /// # Arguments
    ///
    /// * `index` - 0-based position in registration order
    ///
    /// # Returns
    ///
    /// * `Ok(&Customer)` - The customer registered at that position
    /// * `Err(BankError::IndexOutOfRange)` - If `index >= count()`
    pub fn customer_at(&self, index: usize) -> Result<&Customer, BankError> {
        let count = self.customers.len();
        self.customers
            .get(index)
            .ok_or_else(|| BankError::index_out_of_range(index, count))
    }

    /// Look up a customer by 0-based index for mutation
    ///
    /// Mutations made through the returned reference persist in the
    /// registry; this is how deposits and withdrawals reach the stored
    /// account.
    ///
    /// # Arguments
    ///
    /// * `index` - 0-based position in registration order
    ///
    /// # Returns
    ///
    /// * `Ok(&mut Customer)` - The customer registered at that position
    /// * `Err(BankError::IndexOutOfRange)` - If `index >= count()`
    pub fn customer_at_mut(&mut self, index: usize) -> Result<&mut Customer, BankError> {
        let count = self.customers.len();
        self.customers
            .get_mut(index)
            .ok_or_else(|| BankError::index_out_of_range(index, count))
    }

    /// The full ordered registry, for enumeration and listing
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of registered customers
    pub fn count(&self) -> usize {
        self.customers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
