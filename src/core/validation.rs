//! Validation utilities
//!
//! Pure functions consumed by account creation and the money-movement
//! flows. All of them are stateless and side-effect-free so the
//! presentation layer can call them repeatedly inside retry loops without
//! leaking state between attempts.

use crate::types::{AccountKind, BankError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse an account-type selection
///
/// Input is trimmed and lowercased; exactly "checking" and "savings" are
/// accepted.
///
/// # Arguments
///
/// * `input` - The raw selection string
///
/// # Returns
///
/// * `Ok(AccountKind)` - The selected variant
/// * `Err(BankError::InvalidAccountType)` - Anything else; no account is
///   constructed
pub fn parse_account_type(input: &str) -> Result<AccountKind, BankError> {
    match input.trim().to_lowercase().as_str() {
        "checking" => Ok(AccountKind::Checking),
        "savings" => Ok(AccountKind::Savings),
        _ => Err(BankError::invalid_account_type(input.trim())),
    }
}

/// Validate and normalize a national identifier
///
/// Accepts 9 digits, optionally grouped DDD-DD-DDDD (a dash is allowed
/// only after the 3rd and after the 5th digit). The excluded patterns are
/// rejected:
/// - area group `000`, `666`, or `900`-`999` (the first digit must be 0-8)
/// - middle group `00`
/// - serial group `0000`
///
/// # Arguments
///
/// * `input` - The raw identifier string
///
/// # Returns
///
/// * `Ok(String)` - The identifier normalized to `DDD-DD-DDDD`
/// * `Err(BankError::InvalidFormat)` - On any structural or excluded-pattern
///   failure; no partial state is kept, so the caller can simply retry
pub fn normalize_national_id(input: &str) -> Result<String, BankError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars().peekable();
    let mut digits = String::with_capacity(9);

    // 3 digits, optional dash, 2 digits, optional dash, 4 digits
    for (group_len, dash_may_follow) in [(3, true), (2, true), (4, false)] {
        for _ in 0..group_len {
            match chars.next() {
                Some(c) if c.is_ascii_digit() => digits.push(c),
                _ => return Err(BankError::invalid_format(trimmed)),
            }
        }
        if dash_may_follow && chars.peek() == Some(&'-') {
            chars.next();
        }
    }

    // Trailing characters beyond the 9 digits are a structural failure
    if chars.next().is_some() {
        return Err(BankError::invalid_format(trimmed));
    }

    let (area, rest) = digits.split_at(3);
    let (group, serial) = rest.split_at(2);

    if area == "000" || area == "666" || area.starts_with('9') {
        return Err(BankError::invalid_format(trimmed));
    }
    if group == "00" || serial == "0000" {
        return Err(BankError::invalid_format(trimmed));
    }

    Ok(format!("{}-{}-{}", area, group, serial))
}

/// Parse a monetary amount
///
/// Input is trimmed and parsed as a decimal. Non-numeric input is reported
/// as `InvalidAmount` rather than silently treated as zero, so the caller
/// can distinguish a formatting failure from a below-minimum or
/// insufficient-funds failure. Positivity is enforced by the account
/// operations, and opening minimums by the account constructor.
///
/// # Arguments
///
/// * `input` - The raw amount string
///
/// # Returns
///
/// * `Ok(Decimal)` - The parsed amount
/// * `Err(BankError::InvalidAmount)` - If the input is not a number
pub fn parse_amount(input: &str) -> Result<Decimal, BankError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed).map_err(|_| BankError::invalid_amount(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("checking", AccountKind::Checking)]
    #[case("savings", AccountKind::Savings)]
    #[case("CHECKING", AccountKind::Checking)] // case insensitive
    #[case("  Savings  ", AccountKind::Savings)] // trimmed
    fn test_parse_account_type_valid(#[case] input: &str, #[case] expected: AccountKind) {
        assert_eq!(parse_account_type(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::misspelled("cheking")]
    #[case::unsupported("money market")]
    #[case::prefix("check")]
    fn test_parse_account_type_invalid(#[case] input: &str) {
        let result = parse_account_type(input);
        assert!(matches!(result, Err(BankError::InvalidAccountType { .. })));
    }

    #[rstest]
    #[case::fully_dashed("123-45-6789", "123-45-6789")]
    #[case::bare_digits("123456789", "123-45-6789")]
    #[case::first_dash_only("123-456789", "123-45-6789")]
    #[case::second_dash_only("12345-6789", "123-45-6789")]
    #[case::surrounding_whitespace("  123-45-6789  ", "123-45-6789")]
    #[case::high_area("899-45-6789", "899-45-6789")]
    fn test_normalize_national_id_valid(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_national_id(input).unwrap(), expected);
    }

    #[rstest]
    #[case::area_zero("000-45-6789")]
    #[case::area_666("666-12-3456")]
    #[case::area_900("900-12-3456")]
    #[case::area_999("999-12-3456")]
    #[case::group_zero("123-00-6789")]
    #[case::serial_zero("123-45-0000")]
    #[case::too_short("123-45-678")]
    #[case::too_long("123-45-67890")]
    #[case::misplaced_dash("12-345-6789")]
    #[case::letters("abc-de-fghi")]
    #[case::empty("")]
    #[case::interior_space("123 45 6789")]
    fn test_normalize_national_id_invalid(#[case] input: &str) {
        let result = normalize_national_id(input);
        assert!(matches!(result, Err(BankError::InvalidFormat { .. })));
    }

    #[test]
    fn test_normalize_national_id_is_retry_safe() {
        // A failed attempt keeps no state; the same call succeeds afterwards
        assert!(normalize_national_id("666-12-3456").is_err());
        assert_eq!(normalize_national_id("123456789").unwrap(), "123-45-6789");
    }

    #[rstest]
    #[case("100", Decimal::new(100, 0))]
    #[case("99.99", Decimal::new(9999, 2))]
    #[case("  25.5  ", Decimal::new(255, 1))] // trimmed
    #[case("-3", Decimal::new(-3, 0))] // sign handled by account rules
    fn test_parse_amount_valid(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case::words("ten dollars")]
    #[case::empty("")]
    #[case::currency_symbol("$100")]
    #[case::double_dot("1.2.3")]
    fn test_parse_amount_invalid(#[case] input: &str) {
        let result = parse_amount(input);
        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
    }
}
