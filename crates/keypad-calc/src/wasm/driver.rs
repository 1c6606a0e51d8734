//! Mock DOM driver
//!
//! Drives the engine the way the page does: a click on a keypad button or a
//! key press is dispatched as a DOM event, routed to the engine, and the
//! `display` input is rewritten from the engine afterwards.

use tracing::trace;

use super::dom::{DomEvent, MockDom, DISPLAY_ID};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::config::EngineConfig;
use crate::core::engine::CalculatorEngine;
use crate::core::KeypadAction;
use crate::driver::CalculatorDriver;

/// Engine plus mock page
#[derive(Debug)]
pub struct WasmDriver {
    engine: CalculatorEngine,
    keypad: WasmKeypad,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a driver whose engine uses `config`
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let keypad = WasmKeypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        Self {
            engine: CalculatorEngine::with_config(config),
            keypad,
            dom,
        }
    }

    /// The underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The mock page
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The keypad layout
    #[must_use]
    pub const fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Clicks the button with element id `button_id`.
    ///
    /// Returns false when no such button exists; the click is still recorded.
    pub fn click(&mut self, button_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(button_id));
        let Some(action) = self.keypad.handle_click(button_id) else {
            trace!(button_id, "click on unknown element");
            return false;
        };
        self.apply(action);
        true
    }

    /// Clicks the button whose `onclick` attribute is exactly `handler`,
    /// e.g. `"appendOperator('*')"`.
    pub fn click_handler(&mut self, handler: &str) -> bool {
        let Some(id) = self.dom.find_by_onclick(handler).map(|e| e.id.clone()) else {
            trace!(handler, "no button with this onclick handler");
            return false;
        };
        self.click(&id)
    }

    /// Presses a keyboard key (`KeyboardEvent.key` naming)
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_press(key));
        let Some(action) = KeypadAction::from_key(key) else {
            trace!(key, "key has no keypad action");
            return false;
        };
        self.apply(action);
        true
    }

    /// The `value` of the display input
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        self.dom.get_element_value(DISPLAY_ID)
    }

    fn apply(&mut self, action: KeypadAction) {
        self.engine.press(action);
        self.sync_dom();
    }

    fn sync_dom(&mut self) {
        self.dom
            .set_element_value(DISPLAY_ID, self.engine.display());
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: KeypadAction) {
        let id = action.button_id();
        self.click(&id);
    }

    fn display(&self) -> String {
        self.display_value().unwrap_or_default().to_string()
    }

    fn tape_lines(&self) -> Vec<String> {
        self.engine.tape_lines()
    }
}
