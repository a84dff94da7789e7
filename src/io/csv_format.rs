//! CSV format handling for batch operations and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV rows to domain operations
//! - Balance-sheet output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Batch File Format
//!
//! Columns: `op,customer,first_name,last_name,national_id,account_type,amount`
//!
//! - `open` rows carry `first_name`, `last_name`, `national_id`,
//!   `account_type` and `amount` (the opening deposit)
//! - `deposit` and `withdraw` rows carry a 0-based `customer` index and an
//!   `amount`

use crate::core::validation::{normalize_national_id, parse_account_type, parse_amount};
use crate::core::Bank;
use crate::types::{AccountKind, BankError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the batch file columns. Every field except `op` is optional
/// because each operation uses a different subset of columns.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub op: String,
    pub customer: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub account_type: Option<String>,
    pub amount: Option<String>,
}

/// A batch operation in domain terms
///
/// Produced by [`convert_record`]; amounts are parsed and identifiers
/// normalized, but account rules (minimums, positivity, funds) are still
/// enforced by the domain types when the operation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Open an account and register its customer
    Open {
        first_name: String,
        last_name: String,
        national_id: String,
        kind: AccountKind,
        initial_deposit: Decimal,
    },

    /// Deposit into the account of the customer at a 0-based index
    Deposit { customer: usize, amount: Decimal },

    /// Withdraw from the account of the customer at a 0-based index
    Withdraw { customer: usize, amount: Decimal },
}

/// Extract a required field from a CSV record
fn required<'a>(
    field: &'a Option<String>,
    name: &str,
    op: &str,
) -> Result<&'a str, BankError> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(BankError::ParseError {
            line: None,
            message: format!("'{}' operation requires a '{}' field", op, name),
        }),
    }
}

/// Parse the 0-based customer index of a deposit/withdraw row
fn parse_customer_index(field: &Option<String>, op: &str) -> Result<usize, BankError> {
    let raw = required(field, "customer", op)?;
    raw.parse::<usize>().map_err(|_| BankError::ParseError {
        line: None,
        message: format!("Invalid customer index '{}' for '{}'", raw, op),
    })
}

/// Convert a CsvRecord to an Operation
///
/// This function:
/// - Matches the operation name case-insensitively
/// - Validates that the fields the operation needs are present
/// - Normalizes the national identifier and parses the account type and
///   amount through the core validators
///
/// # Arguments
///
/// * `record` - The deserialized CSV row
///
/// # Returns
///
/// * `Ok(Operation)` - Successfully converted row
/// * `Err(BankError)` - Missing/invalid fields (`ParseError`) or validator
///   failures (`InvalidFormat`, `InvalidAccountType`, `InvalidAmount`)
pub fn convert_record(record: CsvRecord) -> Result<Operation, BankError> {
    match record.op.trim().to_lowercase().as_str() {
        "open" => {
            let first_name = required(&record.first_name, "first_name", "open")?.to_string();
            let last_name = required(&record.last_name, "last_name", "open")?.to_string();
            let national_id =
                normalize_national_id(required(&record.national_id, "national_id", "open")?)?;
            let kind = parse_account_type(required(&record.account_type, "account_type", "open")?)?;
            let initial_deposit = parse_amount(required(&record.amount, "amount", "open")?)?;

            Ok(Operation::Open {
                first_name,
                last_name,
                national_id,
                kind,
                initial_deposit,
            })
        }
        "deposit" => Ok(Operation::Deposit {
            customer: parse_customer_index(&record.customer, "deposit")?,
            amount: parse_amount(required(&record.amount, "amount", "deposit")?)?,
        }),
        "withdraw" => Ok(Operation::Withdraw {
            customer: parse_customer_index(&record.customer, "withdraw")?,
            amount: parse_amount(required(&record.amount, "amount", "withdraw")?)?,
        }),
        other => Err(BankError::ParseError {
            line: None,
            message: format!("Unknown operation '{}'", other),
        }),
    }
}

/// Write the final balance sheet as CSV
///
/// Columns: `customer,last_name,first_name,national_id,account_type,balance`
/// with balances formatted to two decimal places. Rows appear in
/// registration order, which is already deterministic.
///
/// # Arguments
///
/// * `bank` - The registry to render
/// * `output` - Mutable reference to a writer for the CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(BankError)` if a write error occurred
pub fn write_balances_csv(bank: &Bank, output: &mut dyn Write) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "customer",
        "last_name",
        "first_name",
        "national_id",
        "account_type",
        "balance",
    ])?;

    for (index, customer) in bank.customers().iter().enumerate() {
        writer.write_record(&[
            index.to_string(),
            customer.last_name().to_string(),
            customer.first_name().to_string(),
            customer.national_id().to_string(),
            customer.account().kind().to_string().to_lowercase(),
            format!("{:.2}", customer.account().balance()),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Account, Customer};
    use rstest::rstest;

    fn record(
        op: &str,
        customer: Option<&str>,
        first: Option<&str>,
        last: Option<&str>,
        id: Option<&str>,
        kind: Option<&str>,
        amount: Option<&str>,
    ) -> CsvRecord {
        CsvRecord {
            op: op.to_string(),
            customer: customer.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            national_id: id.map(str::to_string),
            account_type: kind.map(str::to_string),
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn test_convert_open_record() {
        let result = convert_record(record(
            "open",
            None,
            Some("Jane"),
            Some("Doe"),
            Some("123456789"),
            Some("checking"),
            Some("150.00"),
        ));

        assert_eq!(
            result.unwrap(),
            Operation::Open {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                national_id: "123-45-6789".to_string(),
                kind: AccountKind::Checking,
                initial_deposit: Decimal::new(15000, 2),
            }
        );
    }

    #[rstest]
    #[case::deposit("deposit")]
    #[case::uppercase("DEPOSIT")] // case insensitive
    fn test_convert_deposit_record(#[case] op: &str) {
        let result = convert_record(record(op, Some("0"), None, None, None, None, Some("50")));

        assert_eq!(
            result.unwrap(),
            Operation::Deposit {
                customer: 0,
                amount: Decimal::new(50, 0),
            }
        );
    }

    #[test]
    fn test_convert_withdraw_record() {
        let result = convert_record(record(
            "withdraw",
            Some("2"),
            None,
            None,
            None,
            None,
            Some("25.50"),
        ));

        assert_eq!(
            result.unwrap(),
            Operation::Withdraw {
                customer: 2,
                amount: Decimal::new(2550, 2),
            }
        );
    }

    #[rstest]
    #[case::unknown_op(
        record("transfer", Some("0"), None, None, None, None, Some("10")),
        "Unknown operation"
    )]
    #[case::open_missing_first_name(
        record("open", None, None, Some("Doe"), Some("123456789"), Some("checking"), Some("150")),
        "requires a 'first_name' field"
    )]
    #[case::open_missing_amount(
        record("open", None, Some("Jane"), Some("Doe"), Some("123456789"), Some("checking"), None),
        "requires an 'amount' field"
    )]
    #[case::deposit_missing_customer(
        record("deposit", None, None, None, None, None, Some("10")),
        "requires a 'customer' field"
    )]
    #[case::deposit_bad_index(
        record("deposit", Some("first"), None, None, None, None, Some("10")),
        "Invalid customer index"
    )]
    fn test_convert_record_parse_errors(#[case] input: CsvRecord, #[case] expected: &str) {
        let error = convert_record(input).unwrap_err();
        assert!(matches!(error, BankError::ParseError { .. }));
        assert!(error.to_string().contains(expected));
    }

    #[test]
    fn test_convert_open_rejects_bad_national_id() {
        let result = convert_record(record(
            "open",
            None,
            Some("Jane"),
            Some("Doe"),
            Some("666-12-3456"),
            Some("checking"),
            Some("150"),
        ));

        assert!(matches!(result, Err(BankError::InvalidFormat { .. })));
    }

    #[test]
    fn test_convert_open_rejects_bad_account_type() {
        let result = convert_record(record(
            "open",
            None,
            Some("Jane"),
            Some("Doe"),
            Some("123456789"),
            Some("brokerage"),
            Some("150"),
        ));

        assert!(matches!(result, Err(BankError::InvalidAccountType { .. })));
    }

    #[test]
    fn test_convert_deposit_rejects_non_numeric_amount() {
        let result = convert_record(record(
            "deposit",
            Some("0"),
            None,
            None,
            None,
            None,
            Some("lots"),
        ));

        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
    }

    #[test]
    fn test_write_balances_csv_empty_bank() {
        let bank = Bank::new();
        let mut output = Vec::new();

        write_balances_csv(&bank, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "customer,last_name,first_name,national_id,account_type,balance\n"
        );
    }

    #[test]
    fn test_write_balances_csv_registration_order() {
        let mut bank = Bank::new();
        bank.add_customer(Customer::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "123-45-6789".to_string(),
            Account::open_checking(Decimal::new(15000, 2)).unwrap(),
        ));
        bank.add_customer(Customer::new(
            "John".to_string(),
            "Smith".to_string(),
            "321-54-9876".to_string(),
            Account::open_savings(Decimal::new(5000, 2)).unwrap(),
        ));

        let mut output = Vec::new();
        write_balances_csv(&bank, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "customer,last_name,first_name,national_id,account_type,balance\n\
             0,Doe,Jane,123-45-6789,checking,150.00\n\
             1,Smith,John,321-54-9876,savings,50.00\n"
        );
    }
}
