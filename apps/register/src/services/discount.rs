//! # Discount Registry
//!
//! Customer discount lookup. The current store policy grants no
//! discounts, so every customer gets the neutral factor `1`; the
//! registry exists so the controller's end-of-sale flow already has the
//! seam a future discount database plugs into.

use rust_decimal::Decimal;
use tracing::debug;

/// Looks up the discount factor for a customer.
#[derive(Debug, Default)]
pub struct DiscountRegistry;

impl DiscountRegistry {
    pub fn new() -> Self {
        DiscountRegistry
    }

    /// The factor the sale total is multiplied by. `1` means no discount.
    pub fn discount_factor(&self, customer_id: &str) -> Decimal {
        debug!(customer_id, "Discount lookup (no discounts configured)");
        Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discounts_configured() {
        let registry = DiscountRegistry::new();
        assert_eq!(registry.discount_factor("1234"), Decimal::ONE);
        assert_eq!(registry.discount_factor(""), Decimal::ONE);
    }
}
