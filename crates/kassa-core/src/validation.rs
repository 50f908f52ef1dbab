//! # Validation Module
//!
//! Catalog entry validation for Kassa.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loading (register app)                               │
//! │  ├── JSON shape checks (deserialization)                               │
//! │  └── Rejects malformed files before the register opens                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Sale registration (kassa-core)                               │
//! │  └── THIS MODULE: every item is re-checked as it enters a sale         │
//! │                                                                         │
//! │  Defense in depth: a hand-built CatalogItem gets the same checks       │
//! │  as one parsed from a file                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use kassa_core::validation::{validate_item_id, validate_item_name};
//!
//! // Validate an identifier before a catalog lookup
//! validate_item_id("001").unwrap();
//!
//! // Validate a display name before it reaches a receipt
//! validate_item_name("Apple").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::{Money, VatRate};
use crate::{MAX_ITEM_ID_LEN, MAX_ITEM_NAME_LEN};
use rust_decimal::Decimal;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 50 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use kassa_core::validation::validate_item_id;
///
/// assert!(validate_item_id("001").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_item_id(item_id: &str) -> ValidationResult<()> {
    let item_id = item_id.trim();

    if item_id.is_empty() {
        return Err(ValidationError::Required {
            field: "item ID".to_string(),
        });
    }

    if item_id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "item ID".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    // Check for valid characters (alphanumeric, hyphen, underscore)
    if !item_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "item ID".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use kassa_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Kaffe 500g").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Monetary Validators
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must not be negative (zero is allowed for giveaways)
///
/// ## Example
/// ```rust
/// use kassa_core::money::Money;
/// use kassa_core::validation::validate_price;
/// use rust_decimal_macros::dec;
///
/// assert!(validate_price(Money::new(dec!(10.00))).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::new(dec!(-0.01))).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a VAT rate.
///
/// ## Rules
/// - Must be a fraction between 0 and 1 inclusive (0.12 means 12%)
///
/// ## Example
/// ```rust
/// use kassa_core::money::VatRate;
/// use kassa_core::validation::validate_vat_rate;
/// use rust_decimal_macros::dec;
///
/// assert!(validate_vat_rate(VatRate::new(dec!(0.25))).is_ok());
/// assert!(validate_vat_rate(VatRate::new(dec!(12))).is_err()); // percent, not fraction
/// ```
pub fn validate_vat_rate(rate: VatRate) -> ValidationResult<()> {
    let fraction = rate.fraction();

    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(ValidationError::NotAFraction {
            field: "VAT rate".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
