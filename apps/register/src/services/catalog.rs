//! # Inventory Catalog
//!
//! The store catalog the register sells from: a JSON file on disk, or a
//! built-in demo set when no file is given.
//!
//! ## Catalog File Format
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "name": "Apple",
//!     "description": "Fresh red apple",
//!     "price": "10.00",
//!     "vat_rate": "0.12"
//!   }
//! ]
//! ```
//! Prices and VAT rates are decimal strings; every entry is validated
//! with the same rules the sale ledger applies, so a bad file is
//! rejected before the register opens.
//!
//! ## Lookup Semantics
//! - Item IDs match case-insensitively ("abc" finds "ABC")
//! - The designated ID `"error"` simulates a lost connection to an
//!   external inventory system. It is a test affordance kept from the
//!   original register, not a protocol.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use kassa_core::{CatalogItem, Money, SaleSummary, ValidationError, VatRate};
use rust_decimal_macros::dec;

/// The ID that simulates a connectivity failure on lookup.
pub const CONNECTIVITY_TEST_ID: &str = "error";

/// Name of the simulated upstream system, used in error messages.
const INVENTORY_SOURCE: &str = "external inventory system";

// =============================================================================
// Catalog Error
// =============================================================================

/// Failures while loading the catalog or serving a lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog entry carries the requested ID.
    #[error("item '{0}' does not exist in the catalog")]
    ItemNotFound(String),

    /// The upstream inventory system cannot be reached.
    ///
    /// Only produced by the designated test ID in this implementation,
    /// but callers must treat it as a real possibility.
    #[error("no connection to {system}")]
    Connectivity { system: String },

    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid JSON item array.
    #[error("catalog file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An entry in the catalog file failed validation.
    #[error("catalog entry '{id}' is invalid: {source}")]
    InvalidEntry {
        id: String,
        source: ValidationError,
    },

    /// Two entries share an ID (IDs compare case-insensitively).
    #[error("catalog entry '{0}' appears more than once")]
    DuplicateEntry(String),
}

// =============================================================================
// Inventory Catalog
// =============================================================================

/// An in-memory catalog of sellable items.
#[derive(Debug, Clone)]
pub struct InventoryCatalog {
    items: Vec<CatalogItem>,
}

impl InventoryCatalog {
    /// Loads and validates a JSON catalog file.
    ///
    /// ## Errors
    /// - `Io` when the file cannot be read
    /// - `Malformed` when it is not a JSON array of items
    /// - `InvalidEntry` when an entry breaks the catalog rules
    /// - `DuplicateEntry` when two entries share an ID
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;

        for (index, item) in items.iter().enumerate() {
            item.validate().map_err(|source| CatalogError::InvalidEntry {
                id: item.id.clone(),
                source,
            })?;

            let duplicate = items[..index]
                .iter()
                .any(|earlier| earlier.id.eq_ignore_ascii_case(&item.id));
            if duplicate {
                return Err(CatalogError::DuplicateEntry(item.id.clone()));
            }
        }

        info!(path = %path.display(), items = items.len(), "Catalog file loaded");
        Ok(InventoryCatalog { items })
    }

    /// The demo catalog used when no file is supplied.
    pub fn built_in() -> Self {
        let items = vec![
            CatalogItem {
                id: "1".to_string(),
                name: "Apple".to_string(),
                description: "Fresh red apple".to_string(),
                price: Money::new(dec!(10.00)),
                vat_rate: VatRate::new(dec!(0.12)),
            },
            CatalogItem {
                id: "2".to_string(),
                name: "Banana".to_string(),
                description: "Yellow banana".to_string(),
                price: Money::new(dec!(15.00)),
                vat_rate: VatRate::new(dec!(0.06)),
            },
            CatalogItem {
                id: "3".to_string(),
                name: "Milk 1L".to_string(),
                description: "Organic whole milk".to_string(),
                price: Money::new(dec!(22.50)),
                vat_rate: VatRate::new(dec!(0.12)),
            },
            CatalogItem {
                id: "4".to_string(),
                name: "Coffee 500g".to_string(),
                description: "Dark roast ground coffee".to_string(),
                price: Money::new(dec!(89.00)),
                vat_rate: VatRate::new(dec!(0.12)),
            },
            CatalogItem {
                id: "5".to_string(),
                name: "Rye bread".to_string(),
                description: "Stone-oven rye loaf".to_string(),
                price: Money::new(dec!(32.00)),
                vat_rate: VatRate::new(dec!(0.12)),
            },
            CatalogItem {
                id: "6".to_string(),
                name: "Toothpaste".to_string(),
                description: "Fluoride toothpaste 75ml".to_string(),
                price: Money::new(dec!(25.00)),
                vat_rate: VatRate::new(dec!(0.25)),
            },
        ];

        InventoryCatalog { items }
    }

    /// Finds an item by ID, case-insensitively.
    ///
    /// Returns a clone so the caller can freeze the entry into a sale.
    pub fn lookup(&self, item_id: &str) -> Result<CatalogItem, CatalogError> {
        if item_id.eq_ignore_ascii_case(CONNECTIVITY_TEST_ID) {
            debug!(item_id, "Connectivity test ID scanned");
            return Err(CatalogError::Connectivity {
                system: INVENTORY_SOURCE.to_string(),
            });
        }

        match self
            .items
            .iter()
            .find(|item| item.id.eq_ignore_ascii_case(item_id))
        {
            Some(item) => {
                debug!(item_id, name = %item.name, "Catalog hit");
                Ok(item.clone())
            }
            None => {
                debug!(item_id, "Catalog miss");
                Err(CatalogError::ItemNotFound(item_id.to_string()))
            }
        }
    }

    /// Tells the (simulated) external inventory system about a sale.
    ///
    /// Fire-and-forget stub: the real system would decrement stock here.
    pub fn record_sale(&self, summary: &SaleSummary) {
        info!(
            sale_id = %summary.sale_id,
            lines = summary.line_items.len(),
            "Inventory update sent to external system"
        );
    }

    /// Number of entries in the catalog.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
