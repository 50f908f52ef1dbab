//! # External Service Wrappers
//!
//! Everything the sale controller talks to besides the sale itself.
//!
//! ## Service Organization
//! ```text
//! services/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── catalog.rs     ◄─── Inventory catalog (file-backed or built-in)
//! ├── printer.rs     ◄─── Receipt rendering
//! ├── accounting.rs  ◄─── Accounting system stub
//! └── discount.rs    ◄─── Customer discount lookup
//! ```
//!
//! The catalog, accounting ledger and discount registry stand in for
//! external store systems; their seams are real even where their
//! behavior is stubbed.

pub mod accounting;
pub mod catalog;
pub mod discount;
pub mod printer;

pub use accounting::AccountingLedger;
pub use catalog::{CatalogError, InventoryCatalog};
pub use discount::DiscountRegistry;
pub use printer::{PrinterError, ReceiptPrinter};
