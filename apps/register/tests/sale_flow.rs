//! End-to-end sale flows through the public API: scripted console
//! sessions, file-backed catalogs, and revenue observers hearing real
//! payments.

use std::io::Cursor;

use rust_decimal_macros::dec;

use kassa_core::{Money, SharedCashDrawer};
use kassa_register::services::InventoryCatalog;
use kassa_register::{Controller, Repl, RevenueFileLog};

/// Runs a scripted console session against the built-in catalog and
/// the given drawer, returning everything printed plus the controller.
fn scripted_session(drawer: SharedCashDrawer, script: &str) -> (String, Controller) {
    let controller = Controller::new(InventoryCatalog::built_in(), drawer);
    let mut repl = Repl::new(controller, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    repl.run().unwrap();
    let (controller, output) = repl.into_parts();
    (String::from_utf8(output).unwrap(), controller)
}

#[test]
fn scripted_sale_produces_receipt_and_change() {
    let drawer = SharedCashDrawer::new();
    let (output, controller) =
        scripted_session(drawer.clone(), "START\n1\n2\nEND\n30\nEXIT\n");

    assert!(output.contains("Item name: Apple"));
    assert!(output.contains("Total cost (incl. VAT): 25.00 SEK"));
    assert!(output.contains("Begin receipt"));
    assert!(output.contains("Total: 25.00 SEK"));
    assert!(output.contains("VAT: 2.10 SEK"));
    assert!(output.contains("Cash: 30.00 SEK"));
    assert!(output.contains("Change: 5.00 SEK"));
    assert!(output.contains("Change to give the customer: 5.00 SEK"));

    assert_eq!(drawer.balance(), Money::new(dec!(25.00)));
    assert_eq!(controller.sales_completed(), 1);
}

#[test]
fn revenue_log_hears_every_completed_sale() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("revenue.log");

    let drawer = SharedCashDrawer::new();
    drawer.add_observer(Box::new(RevenueFileLog::create(&log_path).unwrap()));

    // Two sales in one session: 10.00 then 15.00.
    let script = "START\n1\nEND\n10\nSTART\n2\nEND\n15\nEXIT\n";
    let (_, controller) = scripted_session(drawer.clone(), script);
    assert_eq!(controller.sales_completed(), 2);

    let audit = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = audit.lines().collect();
    assert_eq!(
        lines,
        vec![
            "New payment recorded. Current cash in register: 10.00 SEK",
            "New payment recorded. Current cash in register: 25.00 SEK",
        ]
    );
    assert_eq!(drawer.balance(), Money::new(dec!(25.00)));
}

#[test]
fn catalog_file_drives_the_register() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("store.json");
    std::fs::write(
        &catalog_path,
        r#"[
            {"id": "kaffe", "name": "Kaffe", "description": "Brygg",
             "price": "45.00", "vat_rate": "0.12"},
            {"id": "bulle", "name": "Kanelbulle", "description": "Nybakad",
             "price": "25.00", "vat_rate": "0.12"}
        ]"#,
    )
    .unwrap();

    let catalog = InventoryCatalog::load_from_file(&catalog_path).unwrap();
    let drawer = SharedCashDrawer::new();
    let mut controller = Controller::new(catalog, drawer.clone());

    controller.start_sale();
    controller.register_item("KAFFE").unwrap();
    controller.register_item("bulle").unwrap();
    assert_eq!(
        controller.end_sale(None).unwrap(),
        Money::new(dec!(70.00))
    );

    let outcome = controller.process_payment(Money::new(dec!(100.00))).unwrap();
    assert!(outcome.receipt.contains("Kaffe 1 x 45.00 = 45.00 SEK"));
    assert!(outcome.receipt.contains("Kanelbulle 1 x 25.00 = 25.00 SEK"));
    assert_eq!(outcome.change, Money::new(dec!(30.00)));
    assert_eq!(drawer.balance(), Money::new(dec!(70.00)));
}

#[test]
fn short_payment_is_not_recorded_anywhere() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("revenue.log");

    let drawer = SharedCashDrawer::new();
    drawer.add_observer(Box::new(RevenueFileLog::create(&log_path).unwrap()));
    let mut controller = Controller::new(InventoryCatalog::built_in(), drawer.clone());

    controller.start_sale();
    controller.register_item("1").unwrap();

    let err = controller.process_payment(Money::new(dec!(5.00))).unwrap_err();
    assert!(err.is_payment_retryable());
    assert_eq!(drawer.balance(), Money::zero());
    assert_eq!(controller.sales_completed(), 0);
    assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");

    // The same sale accepts a second, sufficient payment.
    controller.process_payment(Money::new(dec!(10.00))).unwrap();
    assert_eq!(drawer.balance(), Money::new(dec!(10.00)));
    assert!(std::fs::read_to_string(&log_path)
        .unwrap()
        .contains("Current cash in register: 10.00 SEK"));
}

#[test]
fn auto_demo_matches_the_original_script() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("revenue.log");

    let drawer = SharedCashDrawer::new();
    drawer.add_observer(Box::new(RevenueFileLog::create(&log_path).unwrap()));

    let (output, controller) = scripted_session(drawer.clone(), "AUTO\nEXIT\n");

    // 1, 5, 4, 1, 5, 3 register; "error" fails with the connectivity message.
    assert!(output.contains("Connection could not be established with external inventory system"));
    assert!(output.contains("Total cost (incl. VAT): 195.50 SEK"));
    assert!(output.contains("Change to give the customer: 504.50 SEK"));

    assert_eq!(drawer.balance(), Money::new(dec!(195.50)));
    assert_eq!(controller.sales_completed(), 1);
    assert!(std::fs::read_to_string(&log_path)
        .unwrap()
        .contains("Current cash in register: 195.50 SEK"));
}

#[test]
fn operations_require_an_active_sale() {
    let mut controller = Controller::new(InventoryCatalog::built_in(), SharedCashDrawer::new());

    assert!(controller.register_item("1").is_err());
    assert!(controller.end_sale(None).is_err());
    assert!(controller.process_payment(Money::new(dec!(10.00))).is_err());

    // After a completed sale the register is back to needing START.
    controller.start_sale();
    controller.register_item("1").unwrap();
    controller.process_payment(Money::new(dec!(10.00))).unwrap();
    assert!(controller.register_item("1").is_err());
}
