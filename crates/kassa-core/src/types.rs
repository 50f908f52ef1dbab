//! # Domain Types
//!
//! Core domain types used throughout Kassa.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CatalogItem   │   │    LineItem     │   │   SaleSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (business)  │   │  item (frozen)  │   │  sale_id        │       │
//! │  │  name           │   │  quantity       │   │  receipt_number │       │
//! │  │  price          │   │  line_total()   │   │  line_items     │       │
//! │  │  vat_rate       │   │  line_vat()     │   │  change         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   SaleStatus    │   A sale is Open while items are scanned and       │
//! │  │  ─────────────  │   becomes Finalized exactly once, when payment     │
//! │  │  Open           │   covers the total.                                │
//! │  │  Finalized      │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Freezing
//! A `LineItem` embeds the full `CatalogItem` as it looked when scanned.
//! Later catalog edits never change a sale that is already in progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::{Money, VatRate};
use crate::validation;

// =============================================================================
// Catalog Item
// =============================================================================

/// A catalog entry describing one sellable item.
///
/// Instances arrive from the store catalog (a JSON file or the built-in
/// demo set) and are embedded unchanged into the sale ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Business identifier used at the register ("001", "banana-eko").
    pub id: String,

    /// Display name shown on the console and the receipt.
    pub name: String,

    /// Free-form description shown when the item is registered.
    pub description: String,

    /// Unit price including VAT.
    pub price: Money,

    /// VAT rate as a fraction of the price (0.12 = 12%).
    pub vat_rate: VatRate,
}

impl CatalogItem {
    /// Returns the VAT amount contained in one unit of this item.
    #[inline]
    pub fn vat_amount(&self) -> Money {
        self.price.calculate_vat(self.vat_rate)
    }

    /// Checks the entry against the catalog rules.
    ///
    /// Every item is validated on its way into a sale, whether it came
    /// from a file or was built in code.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_item_id(&self.id)?;
        validation::validate_item_name(&self.name)?;
        validation::validate_price(self.price)?;
        validation::validate_vat_rate(self.vat_rate)?;
        Ok(())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of a sale: a frozen catalog item plus the quantity sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The catalog entry as it looked when first scanned.
    pub item: CatalogItem,

    /// Number of units sold.
    pub quantity: u32,
}

impl LineItem {
    /// Total price for this line (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }

    /// VAT share of this line.
    ///
    /// Multiplication is exact, so this equals the per-unit VAT summed
    /// over every registration of the item.
    #[inline]
    pub fn line_vat(&self) -> Money {
        self.line_total().calculate_vat(self.item.vat_rate)
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The lifecycle state of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Sale is in progress (items being registered).
    Open,
    /// Sale has been paid and closed. Terminal state.
    Finalized,
}

/// New sales start open.
impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Open
    }
}

// =============================================================================
// Sale Summary
// =============================================================================

/// The result of a completed payment.
///
/// Produced by `Sale::finalize` and consumed by the receipt printer and
/// the accounting ledger. Everything a receipt needs is in here; the
/// sale itself is closed by the time a summary exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleSummary {
    /// Identifier of the sale this summary closed (UUID v4).
    pub sale_id: String,

    /// Human-readable receipt number, unique per register session.
    pub receipt_number: String,

    /// When the sale was opened.
    pub time_of_sale: DateTime<Utc>,

    /// Every line of the sale, in registration order.
    pub line_items: Vec<LineItem>,

    /// Total price including VAT.
    pub total_price: Money,

    /// Total VAT contained in the price.
    pub total_vat: Money,

    /// Amount the customer handed over.
    pub amount_paid: Money,

    /// Change returned to the customer.
    pub change: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
