//! # Sale Controller
//!
//! Coordinates one sale at a time across the catalog, the sale itself,
//! the printer, and the bookkeeping services.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Sale, Start to Finish                        │
//! │                                                                         │
//! │  start_sale()                                                           │
//! │    ├── abandon any unfinished sale (logged)                             │
//! │    ├── Sale::new(drawer)                                                │
//! │    └── printer.open_receipt(opened_at)                                  │
//! │                                                                         │
//! │  register_item("1")          ◄── repeated per scan                      │
//! │    ├── already in sale? ───► sale.increase_quantity (no catalog call)   │
//! │    └── else catalog.lookup ► sale.register_new(item)                    │
//! │                                                                         │
//! │  end_sale(customer_id)                                                  │
//! │    ├── discounts.discount_factor(id)  (logged, currently always 1)      │
//! │    └── returns running total                                            │
//! │                                                                         │
//! │  process_payment(amount)                                                │
//! │    ├── sale.finalize(amount)   ◄── rejects short payment, sale stays    │
//! │    ├── printer.render(summary)     open for another attempt             │
//! │    ├── accounting.record_sale                                           │
//! │    ├── catalog.record_sale                                              │
//! │    └── returns receipt + change                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns no console: every operation returns the data the
//! caller needs and the caller decides how to present it.

use tracing::{debug, info, warn};

use kassa_core::{Money, Sale, SaleStatus, SharedCashDrawer};

use crate::error::RegisterError;
use crate::services::{AccountingLedger, DiscountRegistry, InventoryCatalog, ReceiptPrinter};

/// What the operator gets back from a successful payment.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    /// The rendered receipt text.
    pub receipt: String,
    /// Change to hand back to the customer.
    pub change: Money,
}

/// The application-level face of the register.
///
/// One controller drives one till. It holds at most one sale at a time;
/// the shared cash drawer outlives every sale.
#[derive(Debug)]
pub struct Controller {
    catalog: InventoryCatalog,
    printer: ReceiptPrinter,
    accounting: AccountingLedger,
    discounts: DiscountRegistry,
    drawer: SharedCashDrawer,
    current_sale: Option<Sale>,
}

impl Controller {
    pub fn new(catalog: InventoryCatalog, drawer: SharedCashDrawer) -> Self {
        Controller {
            catalog,
            printer: ReceiptPrinter::new(),
            accounting: AccountingLedger::new(),
            discounts: DiscountRegistry::new(),
            drawer,
            current_sale: None,
        }
    }

    /// Opens a new sale and returns its start time for display.
    ///
    /// An unfinished sale in progress is abandoned: nothing was paid,
    /// nothing reached the drawer, so dropping it is safe.
    pub fn start_sale(&mut self) -> String {
        if let Some(previous) = &self.current_sale {
            if previous.status() == SaleStatus::Open {
                warn!(sale_id = %previous.id(), "Unfinished sale abandoned by new START");
            }
        }

        let sale = Sale::new(self.drawer.clone());
        info!(sale_id = %sale.id(), "Sale started");
        self.printer.open_receipt(sale.opened_at());

        let started_at = sale.time_of_sale();
        self.current_sale = Some(sale);
        started_at
    }

    /// Registers one scan of an item.
    ///
    /// A rescan of an item already in the sale bumps its quantity
    /// without consulting the catalog again. Returns the registration
    /// text with updated running totals.
    pub fn register_item(&mut self, item_id: &str) -> Result<String, RegisterError> {
        let sale = self.current_sale.as_mut().ok_or(RegisterError::NoActiveSale)?;

        if sale.item_exists(item_id) {
            debug!(item_id, "Rescan, increasing quantity");
            return Ok(sale.increase_quantity(item_id)?);
        }

        let item = self.catalog.lookup(item_id)?;
        if sale.item_exists(&item.id) {
            // The scan matched an existing line under different casing.
            debug!(item_id, canonical = %item.id, "Rescan under different casing");
            return Ok(sale.increase_quantity(&item.id)?);
        }

        debug!(item_id = %item.id, name = %item.name, "New item registered");
        Ok(sale.register_new(item)?)
    }

    /// Ends registration and returns the amount due.
    ///
    /// A known customer ID is run through the discount registry; with
    /// no discounts configured the factor is logged and the total is
    /// returned unchanged.
    pub fn end_sale(&mut self, customer_id: Option<&str>) -> Result<Money, RegisterError> {
        let sale = self.current_sale.as_ref().ok_or(RegisterError::NoActiveSale)?;
        let total = sale.running_total();

        if let Some(id) = customer_id {
            let factor = self.discounts.discount_factor(id);
            debug!(customer_id = id, %factor, "Discount factor applied");
        }

        info!(sale_id = %sale.id(), total = %total, "Registration ended");
        Ok(total)
    }

    /// Takes the customer's cash and completes the sale.
    ///
    /// On success the receipt is rendered, the sale is posted to
    /// accounting and inventory, and the controller is ready for the
    /// next sale. A short payment changes nothing; the same sale stays
    /// open for another attempt.
    pub fn process_payment(&mut self, amount_paid: Money) -> Result<PaymentOutcome, RegisterError> {
        let sale = self.current_sale.as_mut().ok_or(RegisterError::NoActiveSale)?;

        let summary = sale.finalize(amount_paid)?;
        let receipt = self.printer.render(&summary)?;

        self.accounting.record_sale(&summary);
        self.catalog.record_sale(&summary);
        info!(
            sale_id = %summary.sale_id,
            receipt_number = %summary.receipt_number,
            total = %summary.total_price,
            change = %summary.change,
            "Sale completed"
        );

        self.current_sale = None;
        Ok(PaymentOutcome {
            receipt,
            change: summary.change,
        })
    }

    /// True while a sale is open for registration or payment.
    pub fn sale_in_progress(&self) -> bool {
        self.current_sale.is_some()
    }

    /// Cash currently in the drawer.
    pub fn drawer_balance(&self) -> Money {
        self.drawer.balance()
    }

    /// Number of sales completed since startup.
    pub fn sales_completed(&self) -> usize {
        self.accounting.recorded_count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
