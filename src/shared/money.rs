//! Money parsing and formatting helpers.
//!
//! All amounts use `rust_decimal::Decimal` for exact comparison semantics.
//! Formatting is for human-readable display only; it has no parse
//! counterpart.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ModelError;

/// Parse a decimal money amount from text.
pub fn parse_money(input: &str) -> Result<Decimal, ModelError> {
    Decimal::from_str(input.trim()).map_err(|e| ModelError::InvalidMoney {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Format a money amount with two decimal places and thousands separators.
pub fn format_money(amount: &Decimal) -> String {
    group_thousands(format!("{:.2}", amount.round_dp(2)))
}

/// Adds thousands separators to the integer part of a formatted amount.
fn group_thousands(formatted: String) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_money_exact() {
        assert_eq!(parse_money("199.99").unwrap(), dec("199.99"));
        assert_eq!(parse_money(" 1234.50 ").unwrap(), dec("1234.5"));
        assert_eq!(parse_money("-0.01").unwrap(), dec("-0.01"));
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        let err = parse_money("12,34").unwrap_err();
        assert!(matches!(err, ModelError::InvalidMoney { .. }));
        assert!(parse_money("").is_err());
    }

    #[test]
    fn test_parse_money_addition_is_exact() {
        let sum = parse_money("0.1").unwrap() + parse_money("0.2").unwrap();
        assert_eq!(sum, dec("0.3"));
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(&dec("0")), "0.00");
        assert_eq!(format_money(&dec("5")), "5.00");
        assert_eq!(format_money(&dec("199.99")), "199.99");
        assert_eq!(format_money(&dec("199.9")), "199.90");
    }

    #[test]
    fn test_format_money_thousands_separators() {
        assert_eq!(format_money(&dec("1234.5")), "1,234.50");
        assert_eq!(format_money(&dec("1234567.89")), "1,234,567.89");
        assert_eq!(format_money(&dec("999")), "999.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(&dec("-1234.5")), "-1,234.50");
        assert_eq!(format_money(&dec("-0.5")), "-0.50");
    }
}
