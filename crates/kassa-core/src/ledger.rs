//! # Item Ledger
//!
//! Tracks which catalog items belong to the current sale and in what
//! quantity.
//!
//! ## Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ItemLedger                                      │
//! │                                                                         │
//! │  add_new("001")            ┌──────────────────────────┐                 │
//! │  ───────────────────────►  │ ("001", qty 1)           │                 │
//! │  increase_quantity("001")  │ ("001", qty 2)           │                 │
//! │  ───────────────────────►  │                          │                 │
//! │  add_new("002")            │ ("001", qty 2)           │                 │
//! │  ───────────────────────►  │ ("002", qty 1)           │  order kept     │
//! │                            └──────────────────────────┘                 │
//! │                                                                         │
//! │  add_new("001") again      → DuplicateItem, ledger untouched            │
//! │  increase_quantity("x")    → UnknownItem, ledger untouched              │
//! │                                                                         │
//! │  The ledger only grows. No removal, no quantity decrease.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries keep registration order so receipts list items the way the
//! cashier scanned them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogItem, LineItem};

// =============================================================================
// Ledger Entry
// =============================================================================

/// One tracked item with its running quantity.
///
/// Private to the ledger; callers see `LineItem` snapshots instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerEntry {
    item: CatalogItem,
    quantity: u32,
}

// =============================================================================
// Item Ledger
// =============================================================================

/// The ordered collection of items registered to one sale.
///
/// ## Design Decisions
/// - **Vec, not HashMap**: registration order matters on the receipt, and
///   a sale holds a handful of lines at most
/// - **Grows only**: a register has no "unscan". Mistakes are handled
///   outside the sale, not by mutating its history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemLedger {
    entries: Vec<LedgerEntry>,
}

impl ItemLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        ItemLedger {
            entries: Vec::new(),
        }
    }

    /// Checks whether an item ID is already tracked.
    ///
    /// Matching is exact; the catalog, not the ledger, decides how loose
    /// operator input may be.
    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.iter().any(|e| e.item.id == item_id)
    }

    /// Records a new item with quantity 1.
    ///
    /// ## Behavior
    /// - Validates the entry; an invalid item never enters the ledger
    /// - Fails with `DuplicateItem` if the ID is already tracked
    /// - On success returns a registration text describing the item
    ///
    /// ## Errors
    /// A failed call leaves the ledger exactly as it was.
    pub fn add_new(&mut self, item: CatalogItem) -> CoreResult<String> {
        item.validate()?;

        if self.contains(&item.id) {
            return Err(CoreError::DuplicateItem(item.id));
        }

        let text = Self::registration_text(&item, 1);
        self.entries.push(LedgerEntry { item, quantity: 1 });
        Ok(text)
    }

    /// Increments the quantity of an already-tracked item by one.
    ///
    /// ## Behavior
    /// - Fails with `UnknownItem` if the ID was never added via `add_new`
    /// - On success returns the registration text with the new quantity
    pub fn increase_quantity(&mut self, item_id: &str) -> CoreResult<String> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.item.id == item_id)
            .ok_or_else(|| CoreError::UnknownItem(item_id.to_string()))?;

        entry.quantity += 1;
        Ok(Self::registration_text(&entry.item, entry.quantity))
    }

    /// Looks up a tracked item by ID.
    pub fn lookup(&self, item_id: &str) -> Option<&CatalogItem> {
        self.entries
            .iter()
            .find(|e| e.item.id == item_id)
            .map(|e| &e.item)
    }

    /// Returns the recorded quantity for an item (0 if not tracked).
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item.id == item_id)
            .map_or(0, |e| e.quantity)
    }

    /// Returns a defensive copy of every line, in registration order.
    ///
    /// Used to build a `SaleSummary` without exposing mutable internals.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.entries
            .iter()
            .map(|e| LineItem {
                item: e.item.clone(),
                quantity: e.quantity,
            })
            .collect()
    }

    /// Returns the number of distinct items tracked.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the registration text shown after each scan.
    fn registration_text(item: &CatalogItem, quantity: u32) -> String {
        format!(
            "Added 1 item with ID {}:\n\
             Item name: {}\n\
             Price: {}\n\
             VAT: {}\n\
             Description: {}\n\
             Quantity in sale: {}\n\n",
            item.id, item.name, item.price, item.vat_rate, item.description, quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
