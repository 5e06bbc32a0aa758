//! Money value object for catalog prices and computed totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// A non-negative, finite amount in the trip's single currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Money amount, returning error if negative or not finite.
    pub fn try_new(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format(
                "amount",
                "amount must be a finite number",
            ));
        }
        if amount < 0.0 {
            return Err(ValidationError::negative("amount", amount));
        }
        Ok(Self(amount))
    }

    /// Creates a whole-unit amount; always valid.
    pub fn from_units(units: u32) -> Self {
        Self(f64::from(units))
    }

    /// Returns the amount as f64.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Money {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::try_new(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

/// Saturates at `f64::MAX` so totals stay finite.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money((self.0 + rhs.0).min(f64::MAX))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
