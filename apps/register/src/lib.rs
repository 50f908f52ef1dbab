//! # Kassa Register Application
//!
//! The operator-facing register built on top of `kassa-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         kassa-register                                  │
//! │                                                                         │
//! │  stdin ──► Repl ──► Controller ──┬─► InventoryCatalog (file/built-in)   │
//! │  stdout ◄──┘            │        ├─► Sale (kassa-core)                  │
//! │                         │        ├─► ReceiptPrinter                     │
//! │                         │        ├─► AccountingLedger                   │
//! │                         │        └─► DiscountRegistry                   │
//! │                         │                                               │
//! │                         └─► SharedCashDrawer ──► RevenueDisplay         │
//! │                                              └─► RevenueFileLog         │
//! │                                                                         │
//! │  tracing ──► stderr (operator console on stdout stays clean)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Layout
//! ```text
//! src/
//! ├── lib.rs         ◄─── You are here (wiring + startup)
//! ├── main.rs        ◄─── Thin binary entry
//! ├── controller.rs  ◄─── One-sale-at-a-time coordination
//! ├── repl.rs        ◄─── Operator console loop
//! ├── error.rs       ◄─── RegisterError + operator phrasings
//! ├── revenue.rs     ◄─── Cash drawer observers
//! └── services/      ◄─── Catalog, printer, accounting, discounts
//! ```

pub mod controller;
pub mod error;
pub mod repl;
pub mod revenue;
pub mod services;

pub use controller::{Controller, PaymentOutcome};
pub use error::RegisterError;
pub use repl::Repl;
pub use revenue::{RevenueDisplay, RevenueFileLog};

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kassa_core::SharedCashDrawer;
use services::InventoryCatalog;

/// Command-line options for the `kassa` binary.
#[derive(Parser, Debug)]
#[command(name = "kassa")]
#[command(version, about = "Point-of-sale cash register", long_about = None)]
pub struct RegisterArgs {
    /// Path to a JSON catalog file (omit to use the built-in demo catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path of the revenue audit log
    #[arg(long, default_value = "total-revenue.log")]
    pub revenue_log: PathBuf,
}

/// Wires logging, catalog, drawer and observers together, then runs the
/// operator console until EXIT.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = RegisterArgs::parse();
    init_tracing();
    info!("kassa starting");

    let catalog = load_catalog(args.catalog.as_deref());

    let drawer = SharedCashDrawer::new();
    drawer.add_observer(Box::new(RevenueDisplay::new()));
    let revenue_log = RevenueFileLog::create(&args.revenue_log)?;
    info!(path = %revenue_log.path().display(), "Revenue log attached");
    drawer.add_observer(Box::new(revenue_log));

    let controller = Controller::new(catalog, drawer);
    let mut repl = Repl::new(controller, io::stdin().lock(), io::stdout().lock());
    repl.run()?;

    info!("kassa shut down");
    Ok(())
}

/// Tracing to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kassa_core=debug,kassa_register=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the catalog file, or falls back to the built-in demo catalog.
///
/// A broken catalog file must not keep the store from opening, so load
/// failures are logged and the fallback takes over.
fn load_catalog(path: Option<&Path>) -> InventoryCatalog {
    match path {
        Some(path) => match InventoryCatalog::load_from_file(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(path = %path.display(), %err, "Falling back to the built-in catalog");
                InventoryCatalog::built_in()
            }
        },
        None => {
            info!("Using the built-in demo catalog");
            InventoryCatalog::built_in()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
