//! Binary entry point. All wiring lives in the library so tests can
//! drive the same code paths.

use std::process;

fn main() {
    if let Err(err) = kassa_register::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
