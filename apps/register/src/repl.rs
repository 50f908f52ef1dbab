//! # Operator Console
//!
//! Line-based console loop for the register operator. Generic over the
//! input and output streams so a scripted session runs the exact code
//! path a live terminal does.
//!
//! ## User Workflow
//! ```text
//! Enter START to begin a new sale, AUTO to run the demo, EXIT to quit.
//! START
//! New sale started at 2026-08-25 14:31.
//! Scan an item identifier, END to go to payment, EXIT to quit.
//! 1
//! Added 1 item with ID 1:
//! Item name: Apple
//! Price: 10.00 SEK
//! VAT: 12%
//! Description: Fresh red apple
//! Quantity in sale: 1
//!
//! Total cost (incl. VAT): 10.00 SEK
//! Total VAT: 1.20 SEK
//!
//! END
//! Total cost (incl. VAT): 10.00 SEK
//! Enter the amount paid:
//! 50
//! ...receipt...
//! Change to give the customer: 40.00 SEK
//! ```
//!
//! ## Rules
//! - Commands are case-insensitive; `END` and `EXIT` are reserved words
//!   and cannot be item identifiers
//! - End of input anywhere behaves like `EXIT`
//! - A short payment keeps the sale open and asks again
//! - `AUTO` runs a fixed demo script, including one failing lookup

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::error;

use kassa_core::Money;

use crate::controller::Controller;
use crate::error::RegisterError;

/// Item IDs scanned by the AUTO demo. The last one triggers the
/// simulated inventory connectivity failure on purpose.
const DEMO_SCANS: [&str; 7] = ["1", "5", "4", "1", "5", "3", "error"];

/// Cash handed over in the AUTO demo.
const DEMO_PAYMENT: Decimal = dec!(700);

/// Whether the console keeps going after handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The operator console loop.
pub struct Repl<R, W> {
    input: R,
    output: W,
    controller: Controller,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(controller: Controller, input: R, output: W) -> Self {
        Repl {
            input,
            output,
            controller,
        }
    }

    /// The controller behind the console, for inspection after a run.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Tears the console apart, handing back the controller and the
    /// output stream. Used by scripted sessions to inspect both.
    pub fn into_parts(self) -> (Controller, W) {
        (self.controller, self.output)
    }

    /// Runs the console until `EXIT` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Kassa cash register")?;

        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Enter START to begin a new sale, AUTO to run the demo, EXIT to quit."
            )?;
            let Some(line) = self.read_line()? else { break };

            match line.trim().to_ascii_uppercase().as_str() {
                "" => continue,
                "START" => {
                    if self.run_sale()? == Flow::Exit {
                        break;
                    }
                }
                "AUTO" => self.run_demo()?,
                "EXIT" => break,
                _ => writeln!(self.output, "Invalid input.")?,
            }
        }

        writeln!(self.output, "Register closed.")?;
        Ok(())
    }

    /// Registration phase: one line per scan until END or EXIT.
    fn run_sale(&mut self) -> io::Result<Flow> {
        let started_at = self.controller.start_sale();
        writeln!(self.output, "New sale started at {started_at}.")?;
        writeln!(
            self.output,
            "Scan an item identifier, END to go to payment, EXIT to quit."
        )?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };
            let scan = line.trim();

            match scan.to_ascii_uppercase().as_str() {
                "" => continue,
                "END" => return self.run_payment(),
                "EXIT" => return Ok(Flow::Exit),
                _ => match self.controller.register_item(scan) {
                    // Registration text carries its own trailing blank line.
                    Ok(text) => write!(self.output, "{text}")?,
                    Err(err) => self.report_error(&err)?,
                },
            }
        }
    }

    /// Payment phase: asks for cash until the sale is paid.
    fn run_payment(&mut self) -> io::Result<Flow> {
        let total = match self.controller.end_sale(None) {
            Ok(total) => total,
            Err(err) => {
                self.report_error(&err)?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.output, "Total cost (incl. VAT): {total}")?;

        loop {
            writeln!(self.output, "Enter the amount paid:")?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };
            let entry = line.trim();

            if entry.is_empty() {
                continue;
            }
            if entry.eq_ignore_ascii_case("EXIT") {
                return Ok(Flow::Exit);
            }

            let Ok(amount) = entry.parse::<Decimal>() else {
                writeln!(self.output, "Invalid payment input.")?;
                continue;
            };

            match self.controller.process_payment(Money::new(amount)) {
                Ok(outcome) => {
                    writeln!(self.output, "{}", outcome.receipt)?;
                    writeln!(self.output, "Change to give the customer: {}", outcome.change)?;
                    return Ok(Flow::Continue);
                }
                Err(err) => {
                    self.report_error(&err)?;
                    if !err.is_payment_retryable() {
                        return Ok(Flow::Continue);
                    }
                }
            }
        }
    }

    /// The fixed demo sale: six successful scans, one failing lookup,
    /// then payment.
    fn run_demo(&mut self) -> io::Result<()> {
        writeln!(self.output, "Running the scripted demo sale.")?;
        let started_at = self.controller.start_sale();
        writeln!(self.output, "New sale started at {started_at}.")?;

        for item_id in DEMO_SCANS {
            writeln!(self.output, "Scanning {item_id}:")?;
            match self.controller.register_item(item_id) {
                Ok(text) => write!(self.output, "{text}")?,
                Err(err) => self.report_error(&err)?,
            }
        }

        match self.controller.end_sale(None) {
            Ok(total) => writeln!(self.output, "Total cost (incl. VAT): {total}")?,
            Err(err) => self.report_error(&err)?,
        }

        let paid = Money::new(DEMO_PAYMENT);
        writeln!(self.output, "Paying {paid}.")?;
        match self.controller.process_payment(paid) {
            Ok(outcome) => {
                writeln!(self.output, "{}", outcome.receipt)?;
                writeln!(self.output, "Change to give the customer: {}", outcome.change)?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(())
    }

    /// Logs the full error, shows the operator phrasing.
    fn report_error(&mut self, err: &RegisterError) -> io::Result<()> {
        error!(%err, "Operation failed");
        writeln!(self.output, "{}", err.user_message())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InventoryCatalog;
    use kassa_core::SharedCashDrawer;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn session(script: &'static str) -> (String, Repl<Cursor<&'static [u8]>, Vec<u8>>) {
        let controller = Controller::new(InventoryCatalog::built_in(), SharedCashDrawer::new());
        let mut repl = Repl::new(controller, Cursor::new(script.as_bytes()), Vec::new());
        repl.run().unwrap();
        let output = String::from_utf8(repl.output.clone()).unwrap();
        (output, repl)
    }

    #[test]
    fn test_exit_command() {
        let (output, repl) = session("EXIT\n");
        assert!(output.contains("Kassa cash register"));
        assert!(output.ends_with("Register closed.\n"));
        assert!(!repl.controller().sale_in_progress());
    }

    #[test]
    fn test_end_of_input_is_clean_exit() {
        let (output, _) = session("");
        assert!(output.ends_with("Register closed.\n"));
    }

    #[test]
    fn test_invalid_top_level_command() {
        let (output, _) = session("FOO\nEXIT\n");
        assert!(output.contains("Invalid input."));
    }

    #[test]
    fn test_full_scripted_sale() {
        let (output, repl) = session("START\n1\n2\nEND\n30\nEXIT\n");

        assert!(output.contains("Item name: Apple"));
        assert!(output.contains("Item name: Banana"));
        assert!(output.contains("Total cost (incl. VAT): 25.00 SEK"));
        assert!(output.contains("Begin receipt"));
        assert!(output.contains("Change to give the customer: 5.00 SEK"));

        assert_eq!(repl.controller().drawer_balance(), Money::new(dec!(25.00)));
        assert_eq!(repl.controller().sales_completed(), 1);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let (_, repl) = session("start\n1\nend\n10\nexit\n");
        assert_eq!(repl.controller().sales_completed(), 1);
    }

    #[test]
    fn test_unknown_item_keeps_sale_going() {
        let (output, repl) = session("START\n404\n1\nEND\n10\nEXIT\n");
        assert!(output.contains("Item not found in inventory: 404"));
        assert_eq!(repl.controller().sales_completed(), 1);
    }

    #[test]
    fn test_short_payment_asks_again() {
        let (output, repl) = session("START\n1\nEND\n5\n10\nEXIT\n");

        assert!(output.contains(
            "Insufficient payment. The paid amount is 5.00 SEK below the total price."
        ));
        assert!(output.contains("Change to give the customer: 0.00 SEK"));
        assert_eq!(repl.controller().drawer_balance(), Money::new(dec!(10.00)));
    }

    #[test]
    fn test_invalid_payment_entry() {
        let (output, repl) = session("START\n1\nEND\nabc\n10\nEXIT\n");
        assert!(output.contains("Invalid payment input."));
        assert_eq!(repl.controller().sales_completed(), 1);
    }

    #[test]
    fn test_auto_demo() {
        let (output, repl) = session("AUTO\nEXIT\n");

        assert!(output.contains("Running the scripted demo sale."));
        assert!(output.contains(
            "Connection could not be established with external inventory system"
        ));
        assert!(output.contains("Total cost (incl. VAT): 195.50 SEK"));
        assert!(output.contains("Change to give the customer: 504.50 SEK"));

        assert_eq!(repl.controller().drawer_balance(), Money::new(dec!(195.50)));
        assert_eq!(repl.controller().sales_completed(), 1);
    }

    #[test]
    fn test_exit_during_registration() {
        let (output, repl) = session("START\n1\nEXIT\n");
        assert!(output.ends_with("Register closed.\n"));
        assert_eq!(repl.controller().sales_completed(), 0);
        assert_eq!(repl.controller().drawer_balance(), Money::zero());
    }
}
