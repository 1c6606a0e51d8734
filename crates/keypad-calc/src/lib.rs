//! Keypad Calculator
//!
//! A sequential, two-operand calculator driven one key at a time, the way a
//! pocket calculator or a web keypad page works: digits build an operand,
//! an operator stores it, the next operand is typed, and `=` (or the next
//! operator) combines the two.
//!
//! # Layers
//!
//! - [`core`]: operators, the input buffer, number formatting, the engine
//!   state machine and the tape of completed evaluations
//! - [`config`]: engine settings (tape size, input cap, error policy)
//! - [`driver`]: one trait to drive any display adapter plus shared
//!   conformance checks
//! - [`wasm`]: the mock page for native tests and, behind the `wasm`
//!   feature, the real browser binding
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit('8');
//! engine.select_operator(Operation::Add);
//! engine.append_digit('2');
//! engine.evaluate();
//! assert_eq!(engine.display(), "10");
//!
//! // Chaining evaluates left to right
//! engine.clear();
//! engine.enter_keys("2+3*4=").unwrap();
//! assert_eq!(engine.display(), "20");
//!
//! // Division by zero shows "Error"
//! engine.enter_keys("c5/0=").unwrap();
//! assert_eq!(engine.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

/// Page bindings; the mock DOM is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{EngineConfig, ErrorPolicy};
    pub use crate::core::buffer::InputBuffer;
    pub use crate::core::engine::{CalculatorEngine, EngineState, PendingOperation};
    pub use crate::core::format::{format_number, parse_operand, render};
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{
        parse_key_sequence, CalcError, CalcResult, Calculator, KeypadAction, Operation,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmKeypad};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = CalculatorEngine::new();
        engine.enter_keys("6*7=").unwrap();
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn test_calculator_direct() {
        assert_eq!(Calculator::apply(6.0, 7.0, Operation::Multiply).unwrap(), 42.0);
        assert_eq!(
            Calculator::apply(1.0, 0.0, Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_render_empty_buffer() {
        assert_eq!(render(&InputBuffer::new()), "0");
    }

    #[test]
    fn test_engine_and_page_agree() {
        let keys = "12.5*4-8/0=3+1=";
        let mut engine = CalculatorEngine::new();
        let mut page = WasmDriver::new();
        for action in parse_key_sequence(keys).unwrap() {
            engine.press(action);
            CalculatorDriver::press(&mut page, action);
            assert_eq!(engine.display(), page.display());
        }
    }

    #[test]
    fn test_tape_records_error() {
        let mut engine = CalculatorEngine::with_config(EngineConfig::new().with_tape_capacity(2));
        engine.enter_keys("1/0=").unwrap();
        let entry = engine.tape().last().unwrap();
        assert_eq!(entry.display(), "1 / 0 = Error");
    }
}
