//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Storefronts that sum totals as floats go wrong fast. A cart with      │
//! │  three ₺79.90 shirts would display ₺239.70000000000002.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kuruş                                            │
//! │    7990 kuruş × 3 = 23970 kuruş, exactly                               │
//! │    Only the UI converts to lira for display                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dezemu_core::money::Money;
//!
//! // Create from kuruş (preferred)
//! let price = Money::from_kurus(7990); // ₺79.90
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₺159.80
//! let total = price + Money::from_kurus(500);    // ₺84.90
//!
//! // NEVER do this:
//! // let bad = Money::from_float(79.90); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kuruş for TRY).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for the persisted cart slot
///
/// ## Where Money Flows
/// ```text
/// Product.price_cents ──► CartLine.unit_price_cents ──► line_total()
///                                      │
///                                      ▼
/// Cart.total_price() ──► OrderDraft.subtotal + shipping ──► total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kuruş (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use dezemu_core::money::Money;
    ///
    /// let price = Money::from_kurus(7990); // Represents ₺79.90
    /// assert_eq!(price.kurus(), 7990);
    /// ```
    #[inline]
    pub const fn from_kurus(kurus: i64) -> Self {
        Money(kurus)
    }

    /// Creates a Money value from major and minor units (lira and kuruş).
    ///
    /// ## Example
    /// ```rust
    /// use dezemu_core::money::Money;
    ///
    /// let price = Money::from_lira_kurus(79, 90); // ₺79.90
    /// assert_eq!(price.kurus(), 7990);
    ///
    /// let refund = Money::from_lira_kurus(-5, 50); // -₺5.50
    /// assert_eq!(refund.kurus(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_lira_kurus(-5, 50)` = -₺5.50, not -₺4.50
    #[inline]
    pub const fn from_lira_kurus(lira: i64, kurus: i64) -> Self {
        if lira < 0 {
            Money(lira * 100 - kurus)
        } else {
            Money(lira * 100 + kurus)
        }
    }

    /// Returns the value in kuruş (smallest currency unit).
    #[inline]
    pub const fn kurus(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (lira) portion.
    #[inline]
    pub const fn lira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kuruş) portion (always 0-99).
    #[inline]
    pub const fn kurus_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use dezemu_core::money::Money;
    ///
    /// let unit_price = Money::from_kurus(7990); // ₺79.90
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.kurus(), 23970); // ₺239.70
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The frontend formats currency itself
/// (via `StoreConfig`) to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₺{}.{:02}", sign, self.lira().abs(), self.kurus_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kurus() {
        let money = Money::from_kurus(7990);
        assert_eq!(money.kurus(), 7990);
        assert_eq!(money.lira(), 79);
        assert_eq!(money.kurus_part(), 90);
    }

    #[test]
    fn test_from_lira_kurus() {
        let money = Money::from_lira_kurus(79, 90);
        assert_eq!(money.kurus(), 7990);

        let negative = Money::from_lira_kurus(-5, 50);
        assert_eq!(negative.kurus(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_kurus(7990)), "₺79.90");
        assert_eq!(format!("{}", Money::from_kurus(500)), "₺5.00");
        assert_eq!(format!("{}", Money::from_kurus(-550)), "-₺5.50");
        assert_eq!(format!("{}", Money::from_kurus(0)), "₺0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kurus(1000);
        let b = Money::from_kurus(500);

        assert_eq!((a + b).kurus(), 1500);
        assert_eq!((a - b).kurus(), 500);
        let result: Money = a * 3;
        assert_eq!(result.kurus(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_kurus(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.kurus(), 897);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 500, 250]
            .iter()
            .map(|k| Money::from_kurus(*k))
            .sum();
        assert_eq!(total.kurus(), 1750);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_kurus(100);
        assert!(positive.is_positive());

        let negative = Money::from_kurus(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().kurus(), 100);
    }
}
