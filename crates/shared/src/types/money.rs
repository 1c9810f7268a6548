//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units with up to 28 fractional digits.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "KES", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Kenyan Shilling
    #[default]
    Kes,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Ugandan Shilling
    Ugx,
    /// Tanzanian Shilling
    Tzs,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// `part / whole * 100`, or `None` if `whole` is zero or the result does
/// not fit in a `Decimal`.
#[must_use]
pub fn checked_percent(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Formats an amount with two fractional digits and thousands separators,
/// e.g. `1234.5` becomes `1,234.50`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, format_amount(self.amount))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kes => write!(f, "KES"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Ugx => write!(f, "UGX"),
            Self::Tzs => write!(f, "TZS"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "KES" => Ok(Self::Kes),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "UGX" => Ok(Self::Ugx),
            "TZS" => Ok(Self::Tzs),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(dec!(0), "0.00")]
    #[case(dec!(5), "5.00")]
    #[case(dec!(999.999), "1,000.00")]
    #[case(dec!(1234.5), "1,234.50")]
    #[case(dec!(1234567.891), "1,234,567.89")]
    #[case(dec!(-2500), "-2,500.00")]
    #[case(dec!(100000), "100,000.00")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_checked_percent() {
        assert_eq!(checked_percent(dec!(850), dec!(1000)), Some(dec!(85)));
        assert_eq!(checked_percent(dec!(1), dec!(0)), None);
        assert_eq!(checked_percent(Decimal::MAX, dec!(0.01)), None);
        assert_eq!(checked_percent(Decimal::MAX, dec!(1)), None);
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(dec!(1500.5), Currency::Kes);
        assert_eq!(money.to_string(), "KES 1,500.50");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("KES").unwrap(), Currency::Kes);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("tzs").unwrap(), Currency::Tzs);
        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_currency_default_is_shilling() {
        assert_eq!(Currency::default(), Currency::Kes);
    }
}
