//! Exact monetary amount rendered in its natural numeric form.
//!
//! Uses `rust_decimal` internally so comparisons and differences are exact,
//! and strips trailing zeros on display (`50`, never `50.00`).

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// A currency amount.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use transaction_report::Amount;
///
/// let amount = Amount::from_str("50.00").unwrap();
/// assert_eq!(amount.to_string(), "50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// A whole number of currency units.
    pub const fn whole(units: u32) -> Self {
        Amount(Decimal::from_parts(units, 0, 0, false, 0))
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Three-way comparison of this value against zero.
    pub fn signum_ordering(&self) -> Ordering {
        self.0.cmp(&Decimal::ZERO)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
