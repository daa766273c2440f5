use crate::Result;

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while parsing money: {0}")]
    Overflow(String),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount with four implied decimal places, ie. `Money(15000)` is `1.5`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 10_000;
    const FRACTION_DIGITS: usize = 4;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub const fn from_whole(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses decimal text such as `1500`, `0.25` or `-3.1`.
    /// Fractional digits past the fourth are truncated.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if whole.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || !is_digits(fraction) {
            Err(MoneyError::Parse("Unexpected character", string.to_string()))?
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };

        let mut fraction = fraction.to_string();
        fraction.truncate(Self::FRACTION_DIGITS);
        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::FRACTION_DIGITS).parse()?;

        let units = whole
            .checked_mul(Self::SCALE)
            .and_then(|units| units.checked_add(fraction))
            .ok_or_else(|| MoneyError::Overflow(string.to_string()))?;

        return Ok(Money(if negative { -units } else { units }));
    }

    pub fn saturating_add(self, other: Self) -> Self {
        return Self(self.0.saturating_add(other.0));
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        return Self(self.0.saturating_sub(other.0));
    }
}

impl FromStr for Money {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Two decimal places, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hundredths = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.is_negative() && hundredths != 0 {
            "-"
        } else {
            ""
        };

        return write!(f, "{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("1500").unwrap(), Money(15_000_000));
        assert_eq!(Money::parse("1500.5").unwrap(), Money(15_005_000));
        assert_eq!(Money::parse(" 0.25 ").unwrap(), Money(2_500));
        assert_eq!(Money::parse(".75").unwrap(), Money(7_500));
        assert_eq!(Money::parse("10.").unwrap(), Money(100_000));
        assert_eq!(Money::parse("-3.10").unwrap(), Money(-31_000));
        assert_eq!(Money::parse("1.123456").unwrap(), Money(11_234));
    }

    #[test]
    fn parse_errors() {
        for input in ["", "-", ".", "1.2.3", "abc", "1e5", "+5", "12,50", "１"] {
            assert!(Money::parse(input).is_err(), "{input:?} should not parse");
        }

        let err = Money::parse("1.2.3").unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoneyError>(),
            Some(&MoneyError::Parse("Too many decimal points", "1.2.3".to_string()))
        );

        let err = Money::parse("922337203685478").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoneyError>(),
            Some(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_whole(1500).to_string(), "1500.00");
        assert_eq!(Money(2_500).to_string(), "0.25");
        assert_eq!(Money(11_250).to_string(), "1.13");
        assert_eq!(Money(11_249).to_string(), "1.12");
        assert_eq!(Money(-31_000).to_string(), "-3.10");
        assert_eq!(Money(-10).to_string(), "0.00");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn saturating_arithmetic() {
        assert_eq!(
            Money::from_whole(10).saturating_add(Money::from_whole(5)),
            Money::from_whole(15)
        );
        assert_eq!(
            Money::from_whole(10).saturating_sub(Money::from_whole(15)),
            Money::from_whole(-5)
        );
        assert_eq!(Money::MAX.saturating_add(Money(1)), Money::MAX);
        assert_eq!(Money::MIN.saturating_sub(Money(1)), Money::MIN);
    }
}
