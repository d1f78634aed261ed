use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from parsing or converting currency amounts.
#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("invalid amount: '{0}'")]
    Invalid(String),

    #[error("amount out of range: {0}")]
    OutOfRange(Decimal),
}

/// A USD amount held as an exact decimal.
///
/// Menu prices arrive as formatted strings (`"$14.99"`); all arithmetic and
/// comparison happens on the parsed decimal, never on the formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Parses a dollar amount, accepting an optional leading `$` and
    /// thousands separators (`"$14.99"`, `"14.99"`, `"1,299.00"`).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Invalid`] when the remainder is not a decimal
    /// number.
    pub fn parse(raw: &str) -> Result<Self, MoneyError> {
        let cleaned: String = raw
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|&c| c != ',')
            .collect();
        let amount =
            Decimal::from_str(&cleaned).map_err(|_| MoneyError::Invalid(raw.to_string()))?;
        Ok(Self(amount))
    }

    #[must_use]
    pub fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Converts to integer minor units (cents) as `round(amount * 100)`,
    /// rounding midpoints away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::OutOfRange`] if the scaled value does not fit
    /// in an `i64`.
    pub fn minor_units(&self) -> Result<i64, MoneyError> {
        let scaled = (self.0 * Decimal::from(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        scaled.to_i64().ok_or(MoneyError::OutOfRange(self.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse(&raw).map_err(serde::de::Error::custom)
    }
}
