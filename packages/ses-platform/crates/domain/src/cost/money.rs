use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount rounded to whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const MAX: Money = Money { cents: u64::MAX };

    /// Round an unrounded amount to two decimals, half away from zero.
    /// Negative and non-finite inputs clamp to zero; amounts past
    /// `u64::MAX` cents saturate at [`Money::MAX`].
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self::ZERO;
        }
        let cents = (amount * 100.0).round();
        // `u64::MAX as f64` is 2^64, the first value out of range
        if cents >= u64::MAX as f64 {
            return Self::MAX;
        }
        Self {
            cents: cents as u64,
        }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

// Serialized as a plain decimal number, the shape dashboards expect.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(Money::from_amount(86.4).to_string(), "86.40");
        assert_eq!(Money::from_amount(6.4 + 50.0 + 30.0).cents(), 8640);
        assert_eq!(Money::from_amount(0.005).cents(), 1);
        assert_eq!(Money::from_amount(0.004).cents(), 0);
        assert_eq!(Money::from_amount(-3.0), Money::ZERO);
        assert_eq!(Money::from_amount(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        assert_eq!(Money::from_amount(1e30), Money::MAX);
        assert_eq!(Money::from_amount(f64::MAX), Money::MAX);
        assert_eq!(Money::from_amount(f64::INFINITY), Money::ZERO);
        assert_eq!(Money::from_amount(1e15).cents(), 100_000_000_000_000_000);
    }

    #[test]
    fn test_sum_and_display() {
        let total: Money = [Money::from_cents(14550), Money::from_cents(4220)]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "187.70");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }
}
