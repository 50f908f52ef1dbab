//! # Register Error Type
//!
//! Unified error type for controller operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Kassa                                │
//! │                                                                         │
//! │  Operator console              Controller                               │
//! │  ────────────────              ──────────                               │
//! │                                                                         │
//! │  register_item("404")                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Controller method                                               │  │
//! │  │  Result<T, RegisterError>                                        │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog miss? ──── CatalogError::ItemNotFound ──┐              │  │
//! │  │         │                                        │              │  │
//! │  │         ▼                                        ▼              │  │
//! │  │  Sale rule broken? ── CoreError ─────────── RegisterError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──────────────────────────────────────────────────────────────────   │
//! │                                                                         │
//! │  REPL shows user_message(): "Item not found in inventory: 404"          │
//! │  tracing logs the full error with context fields                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The REPL never sees a raw Debug dump: `user_message` maps every
//! variant to the phrasing the operator reads, while the full error
//! goes to the structured log.

use thiserror::Error;

use crate::services::catalog::CatalogError;
use crate::services::printer::PrinterError;
use kassa_core::CoreError;

/// Anything a controller operation can fail with.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// An operation that needs an active sale was called without one.
    #[error("no sale is currently in progress")]
    NoActiveSale,

    /// A sale or payment rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog could not serve the request.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The receipt printer was used out of order.
    #[error(transparent)]
    Printer(#[from] PrinterError),
}

impl RegisterError {
    /// The message shown on the operator console.
    ///
    /// Recoverable situations get a specific, actionable phrasing; the
    /// rest collapse into a generic line backed by the structured log.
    pub fn user_message(&self) -> String {
        match self {
            RegisterError::NoActiveSale => {
                "No sale is in progress. Enter START to begin one.".to_string()
            }
            RegisterError::Catalog(CatalogError::ItemNotFound(id)) => {
                format!("Item not found in inventory: {id}")
            }
            RegisterError::Catalog(CatalogError::Connectivity { system }) => {
                format!("Connection could not be established with {system}. Please try again later.")
            }
            RegisterError::Core(CoreError::InsufficientPayment { shortfall, .. }) => {
                format!("Insufficient payment. The paid amount is {shortfall} below the total price.")
            }
            other => format!("An error has occurred: {other}"),
        }
    }

    /// True for failures the operator can fix by retrying the payment.
    pub fn is_payment_retryable(&self) -> bool {
        matches!(
            self,
            RegisterError::Core(CoreError::InsufficientPayment { .. })
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
