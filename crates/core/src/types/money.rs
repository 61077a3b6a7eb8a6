//! Type-safe money representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
///
/// Amounts use [`Decimal`] rather than floats so that cart totals are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., naira, not kobo).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// A whole-naira amount (the storefront's menu prices are whole naira).
    #[must_use]
    pub fn naira(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency: CurrencyCode::NGN,
        }
    }

    /// Zero in naira.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency: CurrencyCode::NGN,
        }
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency: self.currency,
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency, rhs.currency);
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        self.times(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NGN => "\u{20a6}",
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }
}
