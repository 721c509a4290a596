//! Money type for representing currency amounts
//!
//! Amounts are stored as integer cents so that sums over many expenses never
//! drift the way floating-point totals do. Arithmetic saturates at the `i64`
//! bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// A signed monetary amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use trackify::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Amount as a floating point number of currency units, for ratios and charts
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Ratio of this amount to `total`, or `None` when `total` is zero
    pub fn ratio_of(&self, total: Money) -> Option<f64> {
        if total.is_zero() {
            None
        } else {
            Some(self.0 as f64 / total.0 as f64)
        }
    }

    /// Integer division into `parts` equal shares, rounded half away from zero
    pub fn divide(&self, parts: usize) -> Money {
        if parts == 0 {
            return Money::zero();
        }
        let parts = parts as i64;
        let half = parts / 2;
        let rounded = if self.0 >= 0 {
            self.0.saturating_add(half) / parts
        } else {
            self.0.saturating_sub(half) / parts
        };
        Money(rounded)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts `10`, `10.5`, `10.50`, `-3.25`, `$1,250.00`. At most two
    /// fractional digits are allowed.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let s = input.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow(input.to_string()))?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| MoneyParseError::Overflow(input.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain decimal rendering without a currency symbol (`-12.05`)
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let abs = self.0.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Too many decimal places (max 2): {0}")]
    TooPrecise(String),

    #[error("Amount out of range: {0}")]
    Overflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(150)), "   $1.50");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(1205).to_decimal_string(), "12.05");
        assert_eq!(Money::from_cents(-50).to_decimal_string(), "-0.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(99900).format_with_symbol("€"), "€999.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".05").unwrap().cents(), 5);
        assert_eq!(Money::parse("1,250.00").unwrap().cents(), 125000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Money::parse(""), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1.234"), Err(MoneyParseError::TooPrecise(_))));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((-a).cents(), -1000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::parse("90000000000000000").unwrap();
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((-huge - huge).cents(), i64::MIN);
        assert_eq!((-(-huge - huge)).cents(), i64::MAX);

        let total: Money = [huge, huge, Money::from_cents(1)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut acc = Money::from_cents(i64::MIN);
        acc -= Money::from_cents(1);
        assert_eq!(acc.abs().cents(), i64::MAX);
        assert!(Money::from_cents(i64::MAX).divide(2).is_positive());
    }

    #[test]
    fn test_ratio_and_divide() {
        let spent = Money::from_cents(7500);
        assert_eq!(spent.ratio_of(Money::from_cents(10000)), Some(0.75));
        assert_eq!(spent.ratio_of(Money::zero()), None);

        assert_eq!(Money::from_cents(1000).divide(3).cents(), 333);
        assert_eq!(Money::from_cents(1001).divide(2).cents(), 501);
        assert_eq!(Money::from_cents(-1001).divide(2).cents(), -501);
        assert_eq!(Money::from_cents(1000).divide(0), Money::zero());
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "1050");
    }
}
