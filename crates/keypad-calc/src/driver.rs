//! Unified calculator driver
//!
//! Test logic is written once against [`CalculatorDriver`] and run against
//! every display adapter: the bare engine, the mock DOM driver, and anything
//! else that can press keys and read the display back.
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! fn nine_over_three<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
//!     driver.enter_keys("9/3=")?;
//!     assert_eq!(driver.display(), "3");
//!     Ok(())
//! }
//!
//! # fn main() -> CalcResult<()> {
//! nine_over_three(&mut CalculatorEngine::new())?;
//! nine_over_three(&mut WasmDriver::new())?;
//! # Ok(())
//! # }
//! ```

use crate::core::engine::CalculatorEngine;
use crate::core::{parse_key_sequence, CalcResult, KeypadAction};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Performs one keypad action
    fn press(&mut self, action: KeypadAction);

    /// Reads the visible display
    fn display(&self) -> String;

    /// Tape lines (`"expression = result"`), newest first
    fn tape_lines(&self) -> Vec<String>;

    /// Presses every key of a key script
    fn enter_keys(&mut self, keys: &str) -> CalcResult<()> {
        for action in parse_key_sequence(keys)? {
            self.press(action);
        }
        Ok(())
    }

    /// Presses the clear key
    fn clear(&mut self) {
        self.press(KeypadAction::Clear);
    }
}

impl CalculatorDriver for CalculatorEngine {
    fn press(&mut self, action: KeypadAction) {
        Self::press(self, action);
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn tape_lines(&self) -> Vec<String> {
        self.tape().iter_rev().map(|entry| entry.display()).collect()
    }
}

// ===== Shared conformance checks =====
// These work with ANY CalculatorDriver implementation.

/// Digit entry reproduces what was typed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.enter_keys("5")?;
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter_keys("32")?;
    assert_eq!(driver.display(), "32");
    driver.clear();

    driver.enter_keys("05")?;
    assert_eq!(driver.display(), "5");
    driver.clear();
    Ok(())
}

/// Only one decimal point is ever accepted
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_keys("7.5")?;
    assert_eq!(driver.display(), "7.5");
    driver.clear();

    driver.enter_keys("4..2")?;
    assert_eq!(driver.display(), "4.2");
    driver.clear();

    driver.enter_keys("0.")?;
    assert_eq!(driver.display(), "0.");
    driver.clear();
    Ok(())
}

/// The four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (keys, expected) in [("8+2=", "10"), ("9-3=", "6"), ("4*3=", "12"), ("9/3=", "3")] {
        driver.enter_keys(keys)?;
        assert_eq!(driver.display(), expected, "keys {keys}");
        driver.clear();
    }
    Ok(())
}

/// Division by zero shows "Error"; a digit starts over, an operator takes NaN
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_keys("5/0=")?;
    assert_eq!(driver.display(), "Error");

    driver.enter_keys("7")?;
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.enter_keys("5/0=+1=")?;
    assert_eq!(driver.display(), "NaN");
    driver.clear();
    Ok(())
}

/// Operators chain left to right
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_keys("5+3+2=")?;
    assert_eq!(driver.display(), "10");
    driver.clear();

    driver.enter_keys("2+3*4=")?;
    assert_eq!(driver.display(), "20");
    driver.clear();
    Ok(())
}

/// Clear always returns to "0"
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_keys("8")?;
    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.enter_keys("8+2")?;
    driver.clear();
    assert_eq!(driver.display(), "0");
    // A fresh operand after clear must not combine with the dropped "8 +".
    driver.enter_keys("3=")?;
    assert_eq!(driver.display(), "3");
    driver.clear();
    Ok(())
}

/// Delete removes one character and falls back to "0"
pub fn verify_delete_last<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_keys("45<")?;
    assert_eq!(driver.display(), "4");

    driver.enter_keys("<")?;
    assert_eq!(driver.display(), "0");
    driver.clear();
    Ok(())
}

/// Completed evaluations land on the tape, newest first
pub fn verify_tape<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("1+1=")?;
    driver.enter_keys("c2*3=")?;

    let lines = driver.tape_lines();
    assert!(lines.len() >= 2);
    assert_eq!(lines[0], "2 * 3 = 6");
    assert_eq!(lines[1], "1 + 1 = 2");
    driver.clear();
    Ok(())
}

/// Runs every conformance check in sequence
pub fn run_conformance_suite<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_decimal_entry(driver)?;
    verify_basic_arithmetic(driver)?;
    verify_division_by_zero(driver)?;
    verify_chaining(driver)?;
    verify_clear(driver)?;
    verify_delete_last(driver)?;
    verify_tape(driver)
}
