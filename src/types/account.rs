//! Account types for the bank teller core
//!
//! This module defines the Account structure and its two variants
//! (checking and savings). An account holds a single balance and enforces
//! its own deposit and withdrawal rules; the registry never validates
//! amounts on an account's behalf.

use crate::types::error::BankError;
use rust_decimal::Decimal;
use std::fmt;

/// The two account variants offered at account opening
///
/// The variants share the deposit/withdraw contract and differ only in
/// their minimum-opening-balance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Checking account: minimum opening deposit 100.00
    Checking,

    /// Savings account: minimum opening deposit 50.00
    Savings,
}

impl AccountKind {
    /// The minimum opening deposit for this account type
    pub fn minimum_opening_deposit(&self) -> Decimal {
        match self {
            AccountKind::Checking => Decimal::new(10000, 2),
            AccountKind::Savings => Decimal::new(5000, 2),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Checking => write!(f, "Checking"),
            AccountKind::Savings => write!(f, "Savings"),
        }
    }
}

/// A customer account
///
/// Created once at account-opening time with a validated opening deposit,
/// mutated only via [`deposit`](Account::deposit) and
/// [`withdraw`](Account::withdraw), and never destroyed during the process
/// lifetime. The balance is non-negative after every successful operation;
/// any operation that would break that invariant is rejected with the
/// balance unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account variant (checking or savings)
    kind: AccountKind,

    /// Current balance; never negative
    balance: Decimal,
}

impl Account {
    /// Open an account of the given kind with an opening deposit
    ///
    /// # Arguments
    ///
    /// * `kind` - The account variant to open
    /// * `initial_deposit` - The opening deposit
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - Account with balance equal to the opening deposit
    /// * `Err(BankError::BelowMinimum)` - If the deposit is under the
    ///   minimum for the kind (100.00 checking, 50.00 savings)
    pub fn open(kind: AccountKind, initial_deposit: Decimal) -> Result<Self, BankError> {
        let minimum = kind.minimum_opening_deposit();
        if initial_deposit < minimum {
            return Err(BankError::below_minimum(kind, minimum, initial_deposit));
        }

        Ok(Account {
            kind,
            balance: initial_deposit,
        })
    }

    /// Open a checking account (minimum opening deposit 100.00)
    pub fn open_checking(initial_deposit: Decimal) -> Result<Self, BankError> {
        Self::open(AccountKind::Checking, initial_deposit)
    }

    /// Open a savings account (minimum opening deposit 50.00)
    pub fn open_savings(initial_deposit: Decimal) -> Result<Self, BankError> {
        Self::open(AccountKind::Savings, initial_deposit)
    }

    /// The account variant
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Current balance; no side effects
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit funds into the account
    ///
    /// Uses checked arithmetic to maintain balance integrity.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be positive)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Balance increased by exactly `amount`
    /// * `Err(BankError)` - Balance unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - Adding the amount to the balance would overflow
    ///   (`ArithmeticOverflow`)
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(&amount.to_string()));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit"))?;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Withdrawals are allowed down to a balance of 0; there is no
    /// overdraft for either account variant.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be positive and not
    ///   exceed the current balance)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Balance decreased by exactly `amount`
    /// * `Err(BankError)` - Balance unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - `amount` exceeds the current balance (`InsufficientFunds`)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(&amount.to_string()));
        }

        if amount > self.balance {
            return Err(BankError::insufficient_funds(self.balance, amount));
        }

        // The guard above makes underflow impossible
        self.balance -= amount;

        Ok(())
    }
}

impl fmt::Display for Account {
    /// Human-readable summary, e.g. `Checking account, balance: $150.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} account, balance: ${:.2}", self.kind, self.balance)
    }
}
