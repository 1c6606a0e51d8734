//! Keypad layout for the calculator page
//!
//! The buttons, their DOM ids and their inline `onclick` handlers match the
//! page markup, so selectors written against the page
//! (`[onclick="appendNumber('5')"]`) resolve against the mock DOM too.

use super::dom::{DomElement, MockDom};
use crate::core::{KeypadAction, Operation};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.button_id(),
            action,
            row,
            col,
        }
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_class("keypad-btn")
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col))
            .with_attr("onclick", &self.action.handler())
    }
}

/// Calculator page keypad
///
/// ```text
/// [ C ] [DEL] [ / ] [ * ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [ 0 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard page keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Clear, Decimal, Delete, Digit, Equals, Operator};

        let buttons = vec![
            // Row 0: C DEL / *
            KeypadButtonDef::new(Clear, 0, 0),
            KeypadButtonDef::new(Delete, 0, 1),
            KeypadButtonDef::new(Operator(Operation::Divide), 0, 2),
            KeypadButtonDef::new(Operator(Operation::Multiply), 0, 3),
            // Row 1: 7 8 9 -
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(Operator(Operation::Subtract), 1, 3),
            // Row 2: 4 5 6 +
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(Operator(Operation::Add), 2, 3),
            // Row 3: 1 2 3 =
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(Equals, 3, 3),
            // Row 4: 0 .
            KeypadButtonDef::new(Digit(0), 4, 0),
            KeypadButtonDef::new(Decimal, 4, 1),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button at a grid position (the last row is partial)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button for an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Finds the button a single typed character presses
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<&KeypadButtonDef> {
        let action = KeypadAction::from_key(ch.encode_utf8(&mut [0; 4]))?;
        self.find_button_by_action(action)
    }

    /// Creates the keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id("calc-keypad").with_class("keypad"),
            |keypad, btn| keypad.with_child(btn.to_element()),
        )
    }

    /// Maps a button click to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }
}

/// Extension trait for MockDom to add the keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad container and every button to the DOM
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        let keypad_elem = keypad.create_keypad_element();
        self.root.children.push(keypad_elem.clone());
        self.register_element(keypad_elem);

        for btn_def in keypad.buttons() {
            self.register_element(btn_def.to_element());
        }
    }
}
