//! Customer record for the bank teller core
//!
//! A customer binds an identity (name, national identifier) to exactly one
//! account. Identity fields are immutable after creation; the account is
//! mutated through [`Customer::account_mut`].

use crate::types::account::Account;

/// An identity record owning exactly one account
///
/// Construction does not re-validate the national identifier; callers
/// normalize it first (see `core::validation::normalize_national_id`).
/// Customers are never destroyed during the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Given name; non-empty
    first_name: String,

    /// Family name; non-empty
    last_name: String,

    /// National identifier, normalized to DDD-DD-DDDD
    national_id: String,

    /// The customer's single account
    account: Account,
}

impl Customer {
    /// Create a customer from already-validated fields
    pub fn new(
        first_name: String,
        last_name: String,
        national_id: String,
        account: Account,
    ) -> Self {
        Customer {
            first_name,
            last_name,
            national_id,
            account,
        }
    }

    /// Short display line used by selection prompts, e.g. `"Doe, Jane"`
    pub fn basic_info(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Normalized national identifier
    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    /// The customer's account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Mutable access to the customer's account
    ///
    /// Callers move money through this handle; because the registry hands
    /// out references into its own storage, mutations persist for every
    /// later lookup.
    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}
