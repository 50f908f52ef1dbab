//! # Cash Drawer
//!
//! The shared cash balance of the register, with observer fan-out on
//! every deposit.
//!
//! ## Deposit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sale::finalize ──► SharedCashDrawer::deposit(total)                    │
//! │                            │                                            │
//! │                            ▼  (one lock acquisition)                    │
//! │                     balance += amount                                   │
//! │                            │                                            │
//! │                            ▼                                            │
//! │       observers[0].balance_updated(balance)   ← registration order      │
//! │       observers[1].balance_updated(balance)                             │
//! │       observers[n].balance_updated(balance)   ← cumulative balance,     │
//! │                            │                    not the delta           │
//! │                            ▼                                            │
//! │                     returns new balance                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//! - Observers are appended, never removed; each one receives every
//!   notification for the drawer's lifetime
//! - Balance update and fan-out happen under one lock, so concurrent
//!   depositors can never interleave between the two
//! - A deposit with zero observers succeeds silently; wiring up sinks is
//!   the application's job, not a drawer invariant

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::money::Money;

// =============================================================================
// Revenue Observer
// =============================================================================

/// A subscriber to cash drawer deposits.
///
/// Implementations receive the new cumulative balance (not the deposited
/// delta) after every deposit. They are terminal consumers: nothing they
/// do feeds back into the drawer, and any I/O failure is theirs to handle.
///
/// `Send` is required so a drawer can be shared across threads.
pub trait RevenueObserver: Send {
    /// Called synchronously after each deposit with the new balance.
    fn balance_updated(&mut self, balance: Money);
}

// =============================================================================
// Cash Drawer
// =============================================================================

/// The register's cash balance plus its notification list.
///
/// Most code uses [`SharedCashDrawer`]; the unwrapped form exists for
/// single-threaded use and tests.
#[derive(Default)]
pub struct CashDrawer {
    balance: Money,
    observers: Vec<Box<dyn RevenueObserver>>,
}

impl CashDrawer {
    /// Creates a drawer with zero balance and no observers.
    pub fn new() -> Self {
        CashDrawer {
            balance: Money::zero(),
            observers: Vec::new(),
        }
    }

    /// Returns the current balance.
    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Appends an observer to the notification list.
    ///
    /// Observers are notified in registration order and stay registered
    /// for the drawer's lifetime.
    pub fn add_observer(&mut self, observer: Box<dyn RevenueObserver>) {
        self.observers.push(observer);
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Adds an amount to the balance and notifies every observer.
    ///
    /// Each observer receives the new cumulative balance. Returns the
    /// new balance.
    pub fn deposit(&mut self, amount: Money) -> Money {
        self.balance += amount;

        let balance = self.balance;
        for observer in &mut self.observers {
            observer.balance_updated(balance);
        }

        balance
    }
}

/// Observers are opaque, so Debug shows the balance and a count.
impl fmt::Debug for CashDrawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CashDrawer")
            .field("balance", &self.balance)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Shared Cash Drawer
// =============================================================================

/// Thread-safe handle to a cash drawer shared across sales.
///
/// Clones share the same drawer. The handle serializes every deposit:
/// balance update and observer fan-out run as one unit under the lock.
///
/// ## Usage
/// ```rust
/// use kassa_core::drawer::SharedCashDrawer;
/// use kassa_core::money::Money;
/// use rust_decimal_macros::dec;
///
/// let drawer = SharedCashDrawer::new();
/// let balance = drawer.deposit(Money::new(dec!(25.00)));
/// assert_eq!(balance, Money::new(dec!(25.00)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCashDrawer {
    drawer: Arc<Mutex<CashDrawer>>,
}

impl SharedCashDrawer {
    /// Creates a fresh drawer with zero balance and no observers.
    pub fn new() -> Self {
        SharedCashDrawer {
            drawer: Arc::new(Mutex::new(CashDrawer::new())),
        }
    }

    /// Appends an observer to the shared drawer.
    pub fn add_observer(&self, observer: Box<dyn RevenueObserver>) {
        self.with_drawer_mut(|drawer| drawer.add_observer(observer));
    }

    /// Deposits an amount, notifying observers, and returns the new balance.
    pub fn deposit(&self, amount: Money) -> Money {
        self.with_drawer_mut(|drawer| drawer.deposit(amount))
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Money {
        self.with_drawer(|drawer| drawer.balance())
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.with_drawer(|drawer| drawer.observer_count())
    }

    /// Executes a function with read access to the drawer.
    pub fn with_drawer<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CashDrawer) -> R,
    {
        let drawer = self.drawer.lock().expect("Cash drawer mutex poisoned");
        f(&drawer)
    }

    /// Executes a function with write access to the drawer.
    pub fn with_drawer_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CashDrawer) -> R,
    {
        let mut drawer = self.drawer.lock().expect("Cash drawer mutex poisoned");
        f(&mut drawer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    /// Records every notification into a shared log, tagged by observer.
    struct RecordingObserver {
        tag: &'static str,
        log: Arc<Mutex<Vec<(&'static str, Money)>>>,
    }

    impl RevenueObserver for RecordingObserver {
        fn balance_updated(&mut self, balance: Money) {
            self.log.lock().unwrap().push((self.tag, balance));
        }
    }

    fn recording_pair(
        tag: &'static str,
    ) -> (Box<RecordingObserver>, Arc<Mutex<Vec<(&'static str, Money)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let observer = Box::new(RecordingObserver {
            tag,
            log: Arc::clone(&log),
        });
        (observer, log)
    }

    #[test]
    fn test_deposit_updates_balance_and_returns_it() {
        let mut drawer = CashDrawer::new();
        assert!(drawer.balance().is_zero());

        let balance = drawer.deposit(Money::new(dec!(25.00)));
        assert_eq!(balance, Money::new(dec!(25.00)));
        assert_eq!(drawer.balance(), Money::new(dec!(25.00)));
    }

    #[test]
    fn test_deposit_with_no_observers_succeeds() {
        let mut drawer = CashDrawer::new();
        assert_eq!(drawer.observer_count(), 0);

        let balance = drawer.deposit(Money::new(dec!(10.00)));
        assert_eq!(balance, Money::new(dec!(10.00)));
    }

    #[test]
    fn test_observers_receive_cumulative_balance() {
        let mut drawer = CashDrawer::new();
        let (observer, log) = recording_pair("a");
        drawer.add_observer(observer);

        drawer.deposit(Money::new(dec!(50.00)));
        drawer.deposit(Money::new(dec!(25.00)));

        let seen: Vec<Money> = log.lock().unwrap().iter().map(|(_, b)| *b).collect();
        assert_eq!(
            seen,
            vec![Money::new(dec!(50.00)), Money::new(dec!(75.00))]
        );
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let mut drawer = CashDrawer::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        drawer.add_observer(Box::new(RecordingObserver {
            tag: "first",
            log: Arc::clone(&log),
        }));
        drawer.add_observer(Box::new(RecordingObserver {
            tag: "second",
            log: Arc::clone(&log),
        }));

        drawer.deposit(Money::new(dec!(10.00)));

        let entries = log.lock().unwrap();
        assert_eq!(
            *entries,
            vec![
                ("first", Money::new(dec!(10.00))),
                ("second", Money::new(dec!(10.00))),
            ]
        );
    }

    #[test]
    fn test_late_observer_misses_earlier_deposits() {
        let mut drawer = CashDrawer::new();
        drawer.deposit(Money::new(dec!(100.00)));

        let (observer, log) = recording_pair("late");
        drawer.add_observer(observer);
        drawer.deposit(Money::new(dec!(1.00)));

        let seen: Vec<Money> = log.lock().unwrap().iter().map(|(_, b)| *b).collect();
        // Only one notification, but it carries the full balance.
        assert_eq!(seen, vec![Money::new(dec!(101.00))]);
    }

    #[test]
    fn test_shared_drawer_clones_share_balance() {
        let drawer = SharedCashDrawer::new();
        let other = drawer.clone();

        drawer.deposit(Money::new(dec!(25.00)));
        other.deposit(Money::new(dec!(5.00)));

        assert_eq!(drawer.balance(), Money::new(dec!(30.00)));
        assert_eq!(other.balance(), Money::new(dec!(30.00)));
    }

    #[test]
    fn test_shared_drawer_concurrent_deposits() {
        let drawer = SharedCashDrawer::new();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let drawer = drawer.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    drawer.deposit(Money::new(dec!(0.10)));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // 800 deposits of 0.10, exactly.
        assert_eq!(drawer.balance(), Money::new(dec!(80.00)));
    }
}
