//! # Payment Processor
//!
//! A pure, one-shot change computation. No state, no side effects.
//!
//! ## Validate Before Mutate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  finalize(amount_paid)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_change(amount_paid, running_total)  ← THIS MODULE (pure)       │
//! │       │                                                                 │
//! │    Ok(change)────────────► deposit total, close sale                    │
//! │       │                                                                 │
//! │    Err(InsufficientPayment)──► NOTHING has been touched; the sale       │
//! │                                stays open and payment can be retried    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keeping the computation free of side effects is what makes the
//! no-partial-deposit guarantee trivial: there is nothing here to roll back.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Computes the change for a payment.
///
/// `change = amount_paid - total_price`
///
/// ## Errors
/// Fails with `InsufficientPayment` when the paid amount does not cover
/// the total. The error carries the shortfall (`total_price - amount_paid`)
/// so callers can tell the customer exactly how much is missing.
///
/// ## Example
/// ```rust
/// use kassa_core::money::Money;
/// use kassa_core::payment::compute_change;
/// use rust_decimal_macros::dec;
///
/// let change = compute_change(Money::new(dec!(30.00)), Money::new(dec!(25.00))).unwrap();
/// assert_eq!(change, Money::new(dec!(5.00)));
///
/// assert!(compute_change(Money::new(dec!(20.00)), Money::new(dec!(25.00))).is_err());
/// ```
pub fn compute_change(amount_paid: Money, total_price: Money) -> CoreResult<Money> {
    let change = amount_paid - total_price;

    if change.is_negative() {
        return Err(CoreError::InsufficientPayment {
            amount_paid,
            total_price,
            shortfall: total_price - amount_paid,
        });
    }

    Ok(change)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_payment_gives_zero_change() {
        let change = compute_change(Money::new(dec!(25.00)), Money::new(dec!(25.00))).unwrap();
        assert!(change.is_zero());
    }

    #[test]
    fn test_overpayment_gives_change() {
        let change = compute_change(Money::new(dec!(30.00)), Money::new(dec!(25.00))).unwrap();
        assert_eq!(change, Money::new(dec!(5.00)));
    }

    #[test]
    fn test_underpayment_reports_shortfall() {
        let err = compute_change(Money::new(dec!(20.00)), Money::new(dec!(25.00))).unwrap_err();
        match err {
            CoreError::InsufficientPayment {
                amount_paid,
                total_price,
                shortfall,
            } => {
                assert_eq!(amount_paid, Money::new(dec!(20.00)));
                assert_eq!(total_price, Money::new(dec!(25.00)));
                assert_eq!(shortfall, Money::new(dec!(5.00)));
            }
            other => panic!("expected InsufficientPayment, got {other:?}"),
        }
    }

    #[test]
    fn test_one_ore_short_is_still_short() {
        let err = compute_change(Money::new(dec!(24.99)), Money::new(dec!(25.00))).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientPayment { shortfall, .. } if shortfall == Money::new(dec!(0.01))
        ));
    }

    #[test]
    fn test_zero_total_accepts_zero_payment() {
        let change = compute_change(Money::zero(), Money::zero()).unwrap();
        assert!(change.is_zero());
    }
}
