//! # Money Module
//!
//! Provides the `Money` and `VatRate` types for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Sum 0.10 SEK ten thousand times:                                       │
//! │    f64 drifts away from 1000.00 → the receipt lies                      │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Base-10 fixed point, exact addition and multiplication               │
//! │    0.10 × 10 000 = 1000.00, every single time                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kassa_core::money::{Money, VatRate};
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(10.00));
//! let rate = VatRate::new(dec!(0.12)); // 12% VAT
//!
//! let vat = price.calculate_vat(rate);
//! assert_eq!(vat, Money::new(dec!(1.20)));
//! assert_eq!(price.to_string(), "10.00 SEK");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents an amount of money in SEK with exact decimal precision.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for shortfalls and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Full precision internally**: Rounding happens only at display time
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  CatalogItem.price ──┬──► LineItem.line_total ──► Sale.running_total    │
/// │                      │                                                  │
/// │                      └──► Displayed as "10.00 SEK" on the receipt       │
/// │                                                                         │
/// │  amount_paid ──► compute_change ──► CashDrawer.deposit ──► observers    │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(10.99));
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    ///
    /// ## Why No Float Constructor?
    /// A `from_f64` would reintroduce the drift this type exists to
    /// eliminate. Amounts enter the system as decimal literals or as
    /// decimal strings parsed from the catalog file.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Calculates the VAT amount for this price at the given rate.
    ///
    /// The multiplication is exact; no rounding takes place here. A
    /// price of 10.00 at 12% yields exactly 1.2000, which renders as
    /// "1.20 SEK" on the receipt.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::money::{Money, VatRate};
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(1000.00));
    /// let rate = VatRate::new(dec!(0.25)); // 25% VAT
    ///
    /// let vat = price.calculate_vat(rate);
    /// assert_eq!(vat, Money::new(dec!(250.00)));
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Item price: 10.00 SEK
    ///      │
    ///      ▼
    /// calculate_vat(12%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// VAT share: 1.20 SEK → accumulated into Sale.running_vat
    /// ```
    #[inline]
    pub fn calculate_vat(&self, rate: VatRate) -> Money {
        Money(self.0 * rate.fraction())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let unit_price = Money::new(dec!(2.99));
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::new(dec!(8.97)));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Display implementation renders money the way receipts show it.
///
/// ## Note
/// The internal value keeps full precision; only the rendered string is
/// fixed to two decimal places.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} SEK", self.0)
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

/// Multiplication by quantity (for line totals).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

// =============================================================================
// VatRate Type
// =============================================================================

/// A value-added tax rate, stored as a fraction of the price.
///
/// ## Design Decisions
/// - **Fraction, not percent**: `0.12` means 12%. The rate multiplies a
///   price directly, so the stored form is the arithmetic form
/// - **Decimal**: Fractional rates like 12.5% stay exact
///
/// Valid rates lie between 0 and 1 inclusive; `validation::validate_vat_rate`
/// enforces the range when items enter a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VatRate(Decimal);

impl VatRate {
    /// Creates a VAT rate from a fraction.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::money::VatRate;
    /// use rust_decimal_macros::dec;
    ///
    /// let food = VatRate::new(dec!(0.12));
    /// assert_eq!(food.as_percentage(), dec!(12.00));
    /// ```
    #[inline]
    pub const fn new(fraction: Decimal) -> Self {
        VatRate(fraction)
    }

    /// Returns the rate as a fraction (0.12 for 12%).
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the zero rate (VAT-exempt).
    #[inline]
    pub const fn zero() -> Self {
        VatRate(Decimal::ZERO)
    }

    /// Returns the rate as a percentage (12.00 for a 0.12 fraction).
    #[inline]
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

/// Display implementation shows the rate the way receipts show it: "12%".
impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

/// Default rate is VAT-exempt.
impl Default for VatRate {
    fn default() -> Self {
        VatRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
