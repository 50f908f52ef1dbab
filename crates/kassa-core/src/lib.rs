//! # kassa-core: Pure Sale Logic for Kassa
//!
//! This crate is the **heart** of Kassa. It contains the whole sale
//! transaction as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kassa Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Operator Console (REPL)                        │   │
//! │  │    START ──► scan items ──► END ──► payment ──► receipt        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                       Controller                                │   │
//! │  │    start_sale, register_item, end_sale, process_payment        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kassa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   sale    │  │  ledger   │  │  drawer   │  │   │
//! │  │   │   Money   │  │   Sale    │  │ItemLedger │  │CashDrawer │  │   │
//! │  │   │  VatRate  │  │ finalize  │  │ add_new   │  │ observers │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • EXACT DECIMALS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Collaborators (register app): catalog file,              │   │
//! │  │        receipt printer, accounting, revenue observers           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money and VatRate with exact decimal arithmetic (no floats!)
//! - [`types`] - Domain types (CatalogItem, LineItem, SaleSummary)
//! - [`ledger`] - The grows-only item ledger of one sale
//! - [`sale`] - The sale aggregate and its finalize step
//! - [`payment`] - Pure change computation
//! - [`drawer`] - Shared cash drawer with observer fan-out
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog entry validation
//!
//! ## Design Principles
//!
//! 1. **Validate before mutate**: payment is checked before anything is
//!    deposited; a failed finalize leaves no trace
//! 2. **No I/O**: file, console, and network access is FORBIDDEN here
//! 3. **Exact money**: all monetary values are `rust_decimal` decimals
//! 4. **Explicit errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kassa_core::drawer::SharedCashDrawer;
//! use kassa_core::money::{Money, VatRate};
//! use kassa_core::sale::Sale;
//! use kassa_core::types::CatalogItem;
//! use rust_decimal_macros::dec;
//!
//! let drawer = SharedCashDrawer::new();
//! let mut sale = Sale::new(drawer.clone());
//!
//! sale.register_new(CatalogItem {
//!     id: "001".to_string(),
//!     name: "Apple".to_string(),
//!     description: "Fresh red apple".to_string(),
//!     price: Money::new(dec!(10.00)),
//!     vat_rate: VatRate::new(dec!(0.12)),
//! })?;
//!
//! let summary = sale.finalize(Money::new(dec!(30.00)))?;
//! assert_eq!(summary.change, Money::new(dec!(20.00)));
//! assert_eq!(drawer.balance(), Money::new(dec!(10.00)));
//! # Ok::<(), kassa_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod drawer;
pub mod error;
pub mod ledger;
pub mod money;
pub mod payment;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kassa_core::Money` instead of
// `use kassa_core::money::Money`

pub use drawer::{CashDrawer, RevenueObserver, SharedCashDrawer};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::ItemLedger;
pub use money::{Money, VatRate};
pub use sale::Sale;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item identifier
///
/// ## Business Reason
/// Identifiers are typed at the register; anything longer than this is a
/// scanner malfunction or a paste accident, not a real item ID.
pub const MAX_ITEM_ID_LEN: usize = 50;

/// Maximum length of an item display name
///
/// ## Business Reason
/// Receipt lines wrap badly past this point. Keeps catalog files honest.
pub const MAX_ITEM_NAME_LEN: usize = 200;
