//! Page bindings
//!
//! The mock DOM, keypad layout and [`WasmDriver`] run natively so the page
//! behavior is testable without a browser. [`BrowserCalculator`] is the real
//! wasm-bindgen entry point and needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
