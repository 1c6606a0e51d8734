//! Browser bindings
//!
//! Exposes the page's global handlers (`appendNumber`, `appendOperator`,
//! `appendDecimal`, `calculate`, `clearDisplay`, `deleteLast`) as methods on
//! an exported object. After every call the `#display` input is rewritten
//! from the engine.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlInputElement};

use super::dom::DISPLAY_ID;
use crate::core::engine::CalculatorEngine;
use crate::core::{KeypadAction, Operation};

/// Calculator bound to the page's display field
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: CalculatorEngine,
    display: Option<HtmlInputElement>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to `#display` if the page has one
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        let display = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(DISPLAY_ID))
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        if display.is_none() {
            console::warn_1(&"calculator: no #display input on this page".into());
        }

        let calc = Self {
            engine: CalculatorEngine::new(),
            display,
        };
        calc.render();
        calc
    }

    /// The current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.engine.display().to_string()
    }

    /// Appends a digit or multi-digit token
    #[wasm_bindgen(js_name = appendNumber)]
    pub fn append_number(&mut self, token: &str) {
        self.engine.append_number(token);
        self.render();
    }

    /// Selects an operator by symbol; unknown symbols are ignored
    #[wasm_bindgen(js_name = appendOperator)]
    pub fn append_operator(&mut self, symbol: &str) {
        let mut chars = symbol.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operation::from_symbol(ch) {
                self.engine.select_operator(op);
            }
        }
        self.render();
    }

    /// Appends a decimal point
    #[wasm_bindgen(js_name = appendDecimal)]
    pub fn append_decimal(&mut self) {
        self.engine.append_decimal();
        self.render();
    }

    /// Evaluates the pending operation
    pub fn calculate(&mut self) {
        self.engine.evaluate();
        self.render();
    }

    /// Resets the calculator
    #[wasm_bindgen(js_name = clearDisplay)]
    pub fn clear_display(&mut self) {
        self.engine.clear();
        self.render();
    }

    /// Removes the last typed character
    #[wasm_bindgen(js_name = deleteLast)]
    pub fn delete_last(&mut self) {
        self.engine.delete_last();
        self.render();
    }

    /// Keyboard handler; returns true when the key was consumed
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(action) = KeypadAction::from_key(key) else {
            return false;
        };
        self.engine.press(action);
        self.render();
        true
    }

    /// Tape as JSON, oldest first
    #[wasm_bindgen(js_name = tapeJson)]
    pub fn tape_json(&self) -> String {
        self.engine
            .tape()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    fn render(&self) {
        if let Some(input) = &self.display {
            input.set_value(self.engine.display());
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"keypad calculator initialized".into());
}
