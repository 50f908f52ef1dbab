//! # Revenue Observers
//!
//! Concrete [`RevenueObserver`] implementations fed by the cash drawer.
//!
//! ```text
//! CashDrawer.deposit(total)
//!     │
//!     ├──► RevenueDisplay   ── operator-facing running total (stdout)
//!     └──► RevenueFileLog   ── append-only audit line per payment
//! ```
//!
//! Observers are registered once at startup and then only hear balance
//! updates; neither can fail a payment. The file log swallows write
//! errors into a warning because a full disk must not stop the till.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use kassa_core::{Money, RevenueObserver};

// =============================================================================
// Revenue Display
// =============================================================================

/// Shows the running revenue total on the operator console.
#[derive(Debug, Default)]
pub struct RevenueDisplay;

impl RevenueDisplay {
    pub fn new() -> Self {
        RevenueDisplay
    }
}

impl RevenueObserver for RevenueDisplay {
    fn balance_updated(&mut self, balance: Money) {
        println!("Total revenue since program start: {balance}");
    }
}

// =============================================================================
// Revenue File Log
// =============================================================================

/// Appends one audit line per payment to a log file.
#[derive(Debug)]
pub struct RevenueFileLog {
    path: PathBuf,
    file: File,
}

impl RevenueFileLog {
    /// Opens (or creates) the log file in append mode.
    ///
    /// Failing here aborts startup; failing later only warns.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(RevenueFileLog { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RevenueObserver for RevenueFileLog {
    fn balance_updated(&mut self, balance: Money) {
        let line = format!("New payment recorded. Current cash in register: {balance}");
        if let Err(err) = writeln!(self.file, "{line}") {
            warn!(path = %self.path.display(), %err, "Failed to append to revenue log");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kassa_core::SharedCashDrawer;
    use rust_decimal_macros::dec;

    #[test]
    fn test_file_log_appends_one_line_per_payment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revenue.log");

        let mut log = RevenueFileLog::create(&path).unwrap();
        log.balance_updated(Money::new(dec!(50.00)));
        log.balance_updated(Money::new(dec!(75.50)));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "New payment recorded. Current cash in register: 50.00 SEK",
                "New payment recorded. Current cash in register: 75.50 SEK",
            ]
        );
    }

    #[test]
    fn test_create_touches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revenue.log");
        assert!(!path.exists());

        let log = RevenueFileLog::create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(log.path(), path.as_path());
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("revenue.log");
        assert!(RevenueFileLog::create(&path).is_err());
    }

    #[test]
    fn test_file_log_hears_drawer_deposits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revenue.log");

        let drawer = SharedCashDrawer::new();
        drawer.add_observer(Box::new(RevenueFileLog::create(&path).unwrap()));

        drawer.deposit(Money::new(dec!(25.00)));
        drawer.deposit(Money::new(dec!(100.00)));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Current cash in register: 25.00 SEK"));
        assert!(content.contains("Current cash in register: 125.00 SEK"));
    }
}
