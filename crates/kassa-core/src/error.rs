//! # Error Types
//!
//! Domain-specific error types for kassa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kassa-core errors (this file)                                         │
//! │  ├── CoreError        - Sale and payment rule violations               │
//! │  └── ValidationError  - Catalog entry validation failures              │
//! │                                                                         │
//! │  register app errors (separate crate)                                  │
//! │  ├── CatalogError     - Lookup and catalog file failures               │
//! │  ├── PrinterError     - Receipt printer misuse                         │
//! │  └── RegisterError    - What the operator console sees                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RegisterError → Console           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item ID, shortfall, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core sale-processing errors.
///
/// These errors represent violations of sale or payment rules. They leave
/// the sale in its pre-call state, so the caller may retry or recover.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The item is already part of the sale.
    ///
    /// ## When This Occurs
    /// - `register_new` is called for an item ID the ledger already holds
    ///
    /// The caller should use `increase_quantity` for repeat scans instead.
    #[error("Item '{0}' is already registered in this sale")]
    DuplicateItem(String),

    /// The item has never been registered in the sale.
    ///
    /// ## When This Occurs
    /// - `increase_quantity` is called for an item ID the ledger lacks
    #[error("Item '{0}' has not been registered in this sale")]
    UnknownItem(String),

    /// The paid amount does not cover the sale total.
    ///
    /// ## When This Occurs
    /// - The operator enters a payment smaller than the running total
    ///
    /// ## User Workflow
    /// ```text
    /// Pay 20.00 SEK for a 25.00 SEK sale
    ///      │
    ///      ▼
    /// compute_change: 20.00 - 25.00 < 0
    ///      │
    ///      ▼
    /// InsufficientPayment { shortfall: 5.00 SEK }
    ///      │
    ///      ▼
    /// Console shows the shortfall; the sale stays open for a retry
    /// ```
    #[error("Insufficient payment: {amount_paid} paid, {total_price} due, short {shortfall}")]
    InsufficientPayment {
        amount_paid: Money,
        total_price: Money,
        shortfall: Money,
    },

    /// The sale has already been paid for and closed.
    ///
    /// ## When This Occurs
    /// - Registering items or paying after a successful `finalize`
    #[error("Sale {sale_id} is already finalized")]
    SaleAlreadyFinalized { sale_id: String },

    /// A catalog entry failed validation on its way into a sale.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog entry validation errors.
///
/// These errors occur when a catalog entry does not meet requirements.
/// Used for early validation before an item touches a sale.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., disallowed characters in an item ID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Monetary value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// A VAT rate must be a fraction between 0 and 1.
    #[error("{field} must be a fraction between 0 and 1")]
    NotAFraction { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
