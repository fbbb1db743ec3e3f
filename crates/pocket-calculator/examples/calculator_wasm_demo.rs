//! Browser Calculator Demo
//!
//! Drives the calculator page on the mock DOM by clicking keypad buttons,
//! then runs the shared behaviour checks against it.
//!
//! Run with: cargo run --example calculator_wasm_demo

use pocket_calculator::driver::{run_full_specification, CalculatorDriver};
use pocket_calculator::wasm::WasmDriver;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║   Pocket Calculator - Mock DOM Walkthrough ║");
    println!("╚════════════════════════════════════════════╝");
    println!();

    let mut driver = WasmDriver::new();

    println!("Keypad:");
    let (rows, cols) = driver.keypad().dimensions();
    for row in 0..rows {
        let labels: Vec<String> = (0..cols)
            .filter_map(|col| driver.keypad().get_button_at(row, col))
            .map(|button| format!("[{:^3}]", button.label()))
            .collect();
        println!("   {}", labels.join(" "));
    }
    println!();

    println!("Clicking 1 / 3 =");
    for id in ["btn-1", "btn-divide", "btn-3", "btn-equals"] {
        driver.click(id);
        println!("   {id:<12} display: {:?}", driver.display_value());
    }
    println!();

    println!("Typing into the read-only display is ignored:");
    driver.type_into_display("999");
    println!("   display: {:?}", driver.display_value());
    println!();

    println!("Keyboard: 8 / 0 Enter");
    driver.press_keys(&["8", "/", "0", "Enter"]);
    println!("   display: {:?}", driver.display());
    println!();

    println!("Event history ({} events):", driver.dom().event_history().len());
    for (i, event) in driver.dom().event_history().iter().enumerate().take(6) {
        println!("   [{i}] {event:?}");
    }
    println!();

    run_full_specification(&mut WasmDriver::new());
    println!("All behaviour checks passed.");
}
