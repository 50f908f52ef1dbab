//! # Sale
//!
//! One sale transaction: the item ledger, the running totals, and the
//! finalize step that turns payment into a receipt summary.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Sale::new(drawer)          OPEN                                       │
//! │        │              ┌──────────────────┐                              │
//! │        └─────────────►│ register_new     │◄──── repeat scans            │
//! │                       │ increase_quantity│                              │
//! │                       └────────┬─────────┘                              │
//! │                                │ finalize(amount_paid)                  │
//! │                                ▼                                        │
//! │                     compute_change (pure)                               │
//! │                      │                │                                 │
//! │            Err: short│                │Ok: change                       │
//! │                      ▼                ▼                                 │
//! │             sale stays OPEN,   deposit total → FINALIZED                │
//! │             drawer untouched   SaleSummary returned                     │
//! │                                                                         │
//! │   FINALIZED is terminal: every further mutation is rejected.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numeric Semantics
//! VAT is accumulated per line (`price × vat_rate`, summed across lines),
//! never derived by multiplying the grand total by one aggregate rate,
//! because different lines carry different rates.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::drawer::SharedCashDrawer;
use crate::error::{CoreError, CoreResult};
use crate::ledger::ItemLedger;
use crate::money::{Money, VatRate};
use crate::payment;
use crate::types::{CatalogItem, SaleStatus, SaleSummary};

// =============================================================================
// Sale
// =============================================================================

/// A single sale transaction against a shared cash drawer.
#[derive(Debug)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    id: String,

    /// Fixed at creation; shown as "Time of Sale" on the receipt.
    opened_at: DateTime<Utc>,

    status: SaleStatus,
    ledger: ItemLedger,
    running_total: Money,
    running_vat: Money,

    /// Shared with every other sale at this register.
    drawer: SharedCashDrawer,
}

impl Sale {
    /// Opens a new sale with zeroed totals and an empty ledger.
    pub fn new(drawer: SharedCashDrawer) -> Self {
        Sale {
            id: Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            status: SaleStatus::Open,
            ledger: ItemLedger::new(),
            running_total: Money::zero(),
            running_vat: Money::zero(),
            drawer,
        }
    }

    /// Returns the sale identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns when the sale was opened.
    #[inline]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Returns the opening time formatted for display ("2026-08-25 14:30").
    pub fn time_of_sale(&self) -> String {
        self.opened_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Returns the lifecycle state.
    #[inline]
    pub fn status(&self) -> SaleStatus {
        self.status
    }

    /// Checks whether an item is already part of this sale.
    pub fn item_exists(&self, item_id: &str) -> bool {
        self.ledger.contains(item_id)
    }

    /// Current provisional total including VAT.
    #[inline]
    pub fn running_total(&self) -> Money {
        self.running_total
    }

    /// Current provisional VAT share of the total.
    #[inline]
    pub fn running_vat(&self) -> Money {
        self.running_vat
    }

    /// Registers a catalog item not yet part of the sale.
    ///
    /// On success the running totals grow by one unit's price and VAT,
    /// and the returned text combines the ledger's registration text
    /// with the updated totals.
    ///
    /// ## Errors
    /// Ledger errors propagate unchanged; the totals are not touched by
    /// a failed call. Registering against a finalized sale fails with
    /// `SaleAlreadyFinalized`.
    pub fn register_new(&mut self, item: CatalogItem) -> CoreResult<String> {
        self.ensure_open()?;

        let price = item.price;
        let vat_rate = item.vat_rate;
        let text = self.ledger.add_new(item)?;

        self.accumulate(price, vat_rate);
        Ok(format!("{}{}", text, self.totals_text()))
    }

    /// Adds one more unit of an already-registered item.
    ///
    /// ## Errors
    /// Fails with `UnknownItem` if the item was never registered; the
    /// totals are not touched by a failed call.
    pub fn increase_quantity(&mut self, item_id: &str) -> CoreResult<String> {
        self.ensure_open()?;

        let (price, vat_rate) = match self.ledger.lookup(item_id) {
            Some(item) => (item.price, item.vat_rate),
            None => return Err(CoreError::UnknownItem(item_id.to_string())),
        };
        let text = self.ledger.increase_quantity(item_id)?;

        self.accumulate(price, vat_rate);
        Ok(format!("{}{}", text, self.totals_text()))
    }

    /// Settles the sale: validates payment, deposits the total, closes.
    ///
    /// ## Ordering
    /// Change is computed first, as a pure step. Only when the payment
    /// covers the total does the drawer get the deposit (the sale total,
    /// not the tendered amount) and the status flip to `Finalized`. A
    /// failed validation leaves sale and drawer completely unmutated, so
    /// payment can simply be retried.
    pub fn finalize(&mut self, amount_paid: Money) -> CoreResult<SaleSummary> {
        self.ensure_open()?;

        let change = payment::compute_change(amount_paid, self.running_total)?;

        self.drawer.deposit(self.running_total);
        self.status = SaleStatus::Finalized;

        let completed_at = Utc::now();
        Ok(SaleSummary {
            sale_id: self.id.clone(),
            receipt_number: generate_receipt_number(completed_at),
            time_of_sale: self.opened_at,
            line_items: self.ledger.snapshot(),
            total_price: self.running_total,
            total_vat: self.running_vat,
            amount_paid,
            change,
        })
    }

    fn ensure_open(&self) -> CoreResult<()> {
        if self.status == SaleStatus::Finalized {
            return Err(CoreError::SaleAlreadyFinalized {
                sale_id: self.id.clone(),
            });
        }
        Ok(())
    }

    fn accumulate(&mut self, price: Money, vat_rate: VatRate) {
        self.running_total += price;
        self.running_vat += price.calculate_vat(vat_rate);
    }

    /// Renders the totals block appended to every registration text.
    fn totals_text(&self) -> String {
        format!(
            "Total cost (incl. VAT): {}\nTotal VAT: {}\n\n",
            self.running_total, self.running_vat
        )
    }
}

/// Builds a human-readable receipt number from the completion time.
///
/// The sub-second serial keeps two receipts from the same second apart.
fn generate_receipt_number(completed_at: DateTime<Utc>) -> String {
    let serial = completed_at.timestamp_subsec_nanos() % 10_000;
    format!("{}-{:04}", completed_at.format("%y%m%d-%H%M%S"), serial)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn apple() -> CatalogItem {
        CatalogItem {
            id: "001".to_string(),
            name: "Apple".to_string(),
            description: "Fresh red apple".to_string(),
            price: Money::new(dec!(10.00)),
            vat_rate: VatRate::new(dec!(0.12)),
        }
    }

    fn banana() -> CatalogItem {
        CatalogItem {
            id: "002".to_string(),
            name: "Banana".to_string(),
            description: "Yellow banana".to_string(),
            price: Money::new(dec!(15.00)),
            vat_rate: VatRate::new(dec!(0.06)),
        }
    }

    fn open_sale() -> (Sale, SharedCashDrawer) {
        let drawer = SharedCashDrawer::new();
        (Sale::new(drawer.clone()), drawer)
    }

    #[test]
    fn test_new_sale_is_open_and_empty() {
        let (sale, _drawer) = open_sale();
        assert_eq!(sale.status(), SaleStatus::Open);
        assert!(sale.running_total().is_zero());
        assert!(sale.running_vat().is_zero());
        assert!(!sale.item_exists("001"));
        assert!(!sale.id().is_empty());
    }

    #[test]
    fn test_register_new_accumulates_totals() {
        let (mut sale, _drawer) = open_sale();

        let text = sale.register_new(apple()).unwrap();
        assert_eq!(sale.running_total(), Money::new(dec!(10.00)));
        assert_eq!(sale.running_vat(), Money::new(dec!(1.20)));
        assert!(text.contains("Added 1 item with ID 001"));
        assert!(text.contains("Total cost (incl. VAT): 10.00 SEK"));
        assert!(text.contains("Total VAT: 1.20 SEK"));

        sale.register_new(banana()).unwrap();
        assert_eq!(sale.running_total(), Money::new(dec!(25.00)));
        // 1.20 + 0.90, accumulated per line
        assert_eq!(sale.running_vat(), Money::new(dec!(2.10)));
    }

    #[test]
    fn test_duplicate_registration_leaves_totals_unchanged() {
        let (mut sale, _drawer) = open_sale();
        sale.register_new(apple()).unwrap();

        let err = sale.register_new(apple()).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateItem(_)));
        assert_eq!(sale.running_total(), Money::new(dec!(10.00)));
        assert_eq!(sale.running_vat(), Money::new(dec!(1.20)));
    }

    #[test]
    fn test_increase_quantity_adds_one_unit() {
        let (mut sale, _drawer) = open_sale();
        sale.register_new(apple()).unwrap();

        let text = sale.increase_quantity("001").unwrap();
        assert_eq!(sale.running_total(), Money::new(dec!(20.00)));
        assert_eq!(sale.running_vat(), Money::new(dec!(2.40)));
        assert!(text.contains("Quantity in sale: 2"));
        assert!(text.contains("Total cost (incl. VAT): 20.00 SEK"));
    }

    #[test]
    fn test_increase_quantity_unknown_leaves_totals_unchanged() {
        let (mut sale, _drawer) = open_sale();
        sale.register_new(apple()).unwrap();

        let err = sale.increase_quantity("404").unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(id) if id == "404"));
        assert_eq!(sale.running_total(), Money::new(dec!(10.00)));
    }

    #[test]
    fn test_finalize_computes_change_and_deposits_total() {
        let (mut sale, drawer) = open_sale();
        sale.register_new(apple()).unwrap();
        sale.register_new(banana()).unwrap();

        let summary = sale.finalize(Money::new(dec!(30.00))).unwrap();

        assert_eq!(summary.total_price, Money::new(dec!(25.00)));
        assert_eq!(summary.total_vat, Money::new(dec!(2.10)));
        assert_eq!(summary.amount_paid, Money::new(dec!(30.00)));
        assert_eq!(summary.change, Money::new(dec!(5.00)));
        assert_eq!(summary.line_items.len(), 2);
        assert_eq!(summary.sale_id, sale.id());

        // The drawer holds the sale total, not the tendered amount.
        assert_eq!(drawer.balance(), Money::new(dec!(25.00)));
        assert_eq!(sale.status(), SaleStatus::Finalized);
    }

    #[test]
    fn test_insufficient_payment_mutates_nothing_and_allows_retry() {
        let (mut sale, drawer) = open_sale();
        sale.register_new(apple()).unwrap();
        sale.register_new(banana()).unwrap();

        let err = sale.finalize(Money::new(dec!(20.00))).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientPayment { shortfall, .. }
                if shortfall == Money::new(dec!(5.00))
        ));

        // No partial deposit, sale still open.
        assert!(drawer.balance().is_zero());
        assert_eq!(sale.status(), SaleStatus::Open);

        // The same sale settles on retry.
        let summary = sale.finalize(Money::new(dec!(25.00))).unwrap();
        assert!(summary.change.is_zero());
        assert_eq!(drawer.balance(), Money::new(dec!(25.00)));
    }

    #[test]
    fn test_finalize_twice_deposits_only_once() {
        let (mut sale, drawer) = open_sale();
        sale.register_new(apple()).unwrap();
        sale.finalize(Money::new(dec!(10.00))).unwrap();

        let err = sale.finalize(Money::new(dec!(10.00))).unwrap_err();
        assert!(matches!(err, CoreError::SaleAlreadyFinalized { .. }));
        assert_eq!(drawer.balance(), Money::new(dec!(10.00)));
    }

    #[test]
    fn test_finalized_sale_rejects_registrations() {
        let (mut sale, _drawer) = open_sale();
        sale.register_new(apple()).unwrap();
        sale.finalize(Money::new(dec!(10.00))).unwrap();

        assert!(matches!(
            sale.register_new(banana()).unwrap_err(),
            CoreError::SaleAlreadyFinalized { .. }
        ));
        assert!(matches!(
            sale.increase_quantity("001").unwrap_err(),
            CoreError::SaleAlreadyFinalized { .. }
        ));
    }

    #[test]
    fn test_sales_share_one_drawer() {
        let drawer = SharedCashDrawer::new();

        let mut first = Sale::new(drawer.clone());
        first.register_new(apple()).unwrap();
        first.finalize(Money::new(dec!(10.00))).unwrap();

        let mut second = Sale::new(drawer.clone());
        second.register_new(banana()).unwrap();
        second.finalize(Money::new(dec!(20.00))).unwrap();

        assert_eq!(drawer.balance(), Money::new(dec!(25.00)));
    }

    /// One thousand registrations of a 0.10 item total exactly 100.00.
    #[test]
    fn test_many_small_registrations_stay_exact() {
        let (mut sale, _drawer) = open_sale();
        let dime_item = CatalogItem {
            id: "dime".to_string(),
            name: "Dime sweet".to_string(),
            description: "Pick and mix".to_string(),
            price: Money::new(dec!(0.10)),
            vat_rate: VatRate::new(dec!(0.12)),
        };

        sale.register_new(dime_item).unwrap();
        for _ in 0..999 {
            sale.increase_quantity("dime").unwrap();
        }

        assert_eq!(sale.running_total(), Money::new(dec!(100.00)));
        assert_eq!(sale.running_vat(), Money::new(dec!(12.00)));
    }

    #[test]
    fn test_receipt_number_shape() {
        let (mut sale, _drawer) = open_sale();
        sale.register_new(apple()).unwrap();
        let summary = sale.finalize(Money::new(dec!(10.00))).unwrap();

        // yymmdd-HHMMSS-nnnn
        assert_eq!(summary.receipt_number.len(), 18);
        assert_eq!(summary.receipt_number.matches('-').count(), 2);
    }

    #[test]
    fn test_time_of_sale_format() {
        let (sale, _drawer) = open_sale();
        let time = sale.time_of_sale();
        // "2026-08-25 14:30"
        assert_eq!(time.len(), 16);
        assert_eq!(&time[4..5], "-");
        assert_eq!(&time[10..11], " ");
        assert_eq!(&time[13..14], ":");
    }
}
