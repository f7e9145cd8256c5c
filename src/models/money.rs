//! Money type for representing currency amounts
//!
//! Internally stores amounts as thousandths of the currency unit (i64) to
//! avoid floating-point precision issues. All ingestion paths round once,
//! half away from zero, to three decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as thousandths of the currency unit
///
/// Three decimal places is the precision carried by cycle snapshots; storing
/// i64 thousandths keeps every engine computation exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from thousandths
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use cycleplan::models::Money;
    /// let amount = Money::from_major(18000); // 18000.000
    /// ```
    pub const fn from_major(units: i64) -> Self {
        Self(units * 1000)
    }

    /// Create a Money amount from a float, rounding half away from zero
    /// to three decimals
    ///
    /// This is the single ingestion rounding step; values held as `Money`
    /// afterwards are exact and re-rounding is a no-op.
    pub fn from_f64(value: f64) -> Self {
        // f64::round rounds half away from zero, which is the rule here
        Self((value * 1000.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in thousandths
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 1000
    }

    /// Get the fractional portion in thousandths (0-999)
    pub const fn millis_part(&self) -> i64 {
        (self.0 % 1000).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Take a percentage of the amount, rounding half away from zero
    ///
    /// # Examples
    /// ```
    /// use cycleplan::models::Money;
    /// let extra = Money::from_major(8000);
    /// assert_eq!(extra.percent(70), Money::from_major(5600));
    /// assert_eq!(extra.percent(30), Money::from_major(2400));
    /// ```
    pub const fn percent(self, pct: i64) -> Self {
        let scaled = self.0 * pct;
        let quotient = scaled / 100;
        let remainder = scaled % 100;
        let adjust = if remainder.abs() * 2 >= 100 {
            remainder.signum()
        } else {
            0
        };
        Self(quotient + adjust)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.505", "-10.5", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let millis = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fraction to 3 digits
            let frac_str = parts[1];
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 100
                }
                2 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str[..3]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 1000 + frac
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 1000
        };

        Ok(Self(if negative { -millis } else { millis }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    /// Renders with two fraction digits, or three when the thousandths
    /// digit is nonzero
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        let frac = self.millis_part();
        if frac % 10 == 0 {
            write!(f, "{}{}.{:02}", sign, units, frac / 10)
        } else {
            write!(f, "{}{}.{:03}", sign, units, frac)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        let m = Money::from_millis(10_505);
        assert_eq!(m.millis(), 10_505);
        assert_eq!(m.units(), 10);
        assert_eq!(m.millis_part(), 505);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(18_000).millis(), 18_000_000);
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        assert_eq!(Money::from_f64(1.0005).millis(), 1001);
        assert_eq!(Money::from_f64(-1.0005).millis(), -1001);
        assert_eq!(Money::from_f64(1.0004).millis(), 1000);
        assert_eq!(Money::from_f64(18000.0).millis(), 18_000_000);
    }

    #[test]
    fn test_ingestion_rounding_is_idempotent() {
        for raw in [0.0, 12.3455, -7.0015, 99999.999, 0.0005] {
            let once = Money::from_f64(raw);
            let twice = Money::from_f64(once.millis() as f64 / 1000.0);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major(10)), "10.00");
        assert_eq!(format!("{}", Money::from_millis(10_500)), "10.50");
        assert_eq!(format!("{}", Money::from_millis(10_505)), "10.505");
        assert_eq!(format!("{}", Money::from_millis(-10_505)), "-10.505");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        assert_eq!(format!("{}", Money::from_millis(5)), "0.005");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!((a + b).millis(), 15_000);
        assert_eq!((a - b).millis(), 5_000);
        assert_eq!((-a).millis(), -10_000);
    }

    #[test]
    fn test_percent() {
        let extra = Money::from_major(8000);
        assert_eq!(extra.percent(70), Money::from_major(5600));
        assert_eq!(extra.percent(30), Money::from_major(2400));
        assert_eq!(extra.percent(20), Money::from_major(1600));
        // Half-away rounding at the thousandths boundary
        assert_eq!(Money::from_millis(5).percent(30), Money::from_millis(2));
        assert_eq!(Money::from_millis(-5).percent(30), Money::from_millis(-2));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.505").unwrap().millis(), 10_505);
        assert_eq!(Money::parse("-10.5").unwrap().millis(), -10_500);
        assert_eq!(Money::parse("10").unwrap().millis(), 10_000);
        assert_eq!(Money::parse("10.50").unwrap().millis(), 10_500);
        assert_eq!(Money::parse("0.005").unwrap().millis(), 5);
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert!(a > b);
        assert_eq!(a.max(b), a);
        assert_eq!(a.min(b), b);
        assert_eq!((b - a).max(Money::zero()), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_major(1),
            Money::from_major(2),
            Money::from_major(3),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_major(6));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_millis(10_505);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10505");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
