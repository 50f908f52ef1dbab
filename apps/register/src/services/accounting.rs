//! # Accounting Ledger
//!
//! Stand-in for the store's external accounting system. Finalized sales
//! are posted here; the real integration would forward them over the
//! store network.

use tracing::info;

use kassa_core::{Money, SaleSummary};

/// Records finalized sales for bookkeeping.
#[derive(Debug, Default)]
pub struct AccountingLedger {
    recorded: usize,
    total_posted: Money,
}

impl AccountingLedger {
    pub fn new() -> Self {
        AccountingLedger::default()
    }

    /// Posts a finalized sale to the books.
    pub fn record_sale(&mut self, summary: &SaleSummary) {
        self.recorded += 1;
        self.total_posted += summary.total_price;
        info!(
            sale_id = %summary.sale_id,
            total = %summary.total_price,
            vat = %summary.total_vat,
            "Sale posted to accounting"
        );
    }

    /// Number of sales posted since program start.
    pub fn recorded_count(&self) -> usize {
        self.recorded
    }

    /// Sum of all posted sale totals.
    pub fn total_posted(&self) -> Money {
        self.total_posted
    }
}
