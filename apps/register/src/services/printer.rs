//! # Receipt Printer
//!
//! Renders a finalized sale as the printed receipt text.
//!
//! ## Lifecycle
//! A receipt is opened when the sale starts and consumed when it is
//! rendered. Rendering without an open receipt is a programming error
//! surfaced as [`PrinterError::NoOpenReceipt`] rather than a panic.
//!
//! ## Output
//! ```text
//! ------------------ Begin receipt -------------------
//! Time of Sale: 2026-08-25 14:31
//! Receipt number: 260825-143205-0042
//!
//! Apple 1 x 10.00 = 10.00 SEK
//! Banana 2 x 15.00 = 30.00 SEK
//!
//! Total: 40.00 SEK
//! VAT: 3.00 SEK
//!
//! Cash: 50.00 SEK
//! Change: 10.00 SEK
//! ------------------ End receipt ---------------------
//! ```
//!
//! The printer only produces the text. Writing it to the console (or a
//! real printer spool) is the caller's job.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use kassa_core::SaleSummary;

const BEGIN_BANNER: &str = "------------------ Begin receipt -------------------";
const END_BANNER: &str = "------------------ End receipt ---------------------";

/// Failures in the receipt printer.
#[derive(Debug, Error)]
pub enum PrinterError {
    /// `render` was called before `open_receipt`.
    #[error("no receipt has been opened for this sale")]
    NoOpenReceipt,
}

/// Turns sale summaries into printable receipts.
#[derive(Debug, Default)]
pub struct ReceiptPrinter {
    open_since: Option<DateTime<Utc>>,
}

impl ReceiptPrinter {
    pub fn new() -> Self {
        ReceiptPrinter { open_since: None }
    }

    /// Opens a receipt for the sale that just started.
    ///
    /// Opening while another receipt is still open simply replaces it;
    /// the controller logs the abandoned sale separately.
    pub fn open_receipt(&mut self, opened_at: DateTime<Utc>) {
        debug!(%opened_at, "Receipt opened");
        self.open_since = Some(opened_at);
    }

    pub fn has_open_receipt(&self) -> bool {
        self.open_since.is_some()
    }

    /// Renders the receipt text and closes the open receipt.
    pub fn render(&mut self, summary: &SaleSummary) -> Result<String, PrinterError> {
        if self.open_since.take().is_none() {
            return Err(PrinterError::NoOpenReceipt);
        }

        let mut text = String::new();
        text.push_str(BEGIN_BANNER);
        text.push('\n');
        text.push_str(&format!(
            "Time of Sale: {}\n",
            summary.time_of_sale.format("%Y-%m-%d %H:%M")
        ));
        text.push_str(&format!("Receipt number: {}\n", summary.receipt_number));
        text.push('\n');

        for line in &summary.line_items {
            text.push_str(&format!(
                "{} {} x {:.2} = {}\n",
                line.item.name,
                line.quantity,
                line.item.price.amount(),
                line.line_total()
            ));
        }

        text.push('\n');
        text.push_str(&format!("Total: {}\n", summary.total_price));
        text.push_str(&format!("VAT: {}\n", summary.total_vat));
        text.push('\n');
        text.push_str(&format!("Cash: {}\n", summary.amount_paid));
        text.push_str(&format!("Change: {}\n", summary.change));
        text.push_str(END_BANNER);

        debug!(receipt_number = %summary.receipt_number, "Receipt rendered");
        Ok(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
