//! Keypad actions and key mapping
//!
//! Every discrete user action the page can produce maps onto exactly one
//! [`KeypadAction`]. Buttons, keyboard keys and scripted key sequences all go
//! through this type before reaching the engine.

use crate::core::{CalcError, CalcResult, Operation};

/// Actions that keypad buttons and keys can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Select an operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last character
    Delete,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    /// Returns the DOM element id of the button for this action
    #[must_use]
    pub fn button_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::Delete => "btn-delete".to_string(),
        }
    }

    /// Returns the page's inline `onclick` handler for this action
    #[must_use]
    pub fn handler(&self) -> String {
        match self {
            Self::Digit(d) => format!("appendNumber('{d}')"),
            Self::Decimal => "appendDecimal()".to_string(),
            Self::Operator(op) => format!("appendOperator('{}')", op.symbol()),
            Self::Equals => "calculate()".to_string(),
            Self::Clear => "clearDisplay()".to_string(),
            Self::Delete => "deleteLast()".to_string(),
        }
    }

    /// Maps a keyboard key (as reported by `KeyboardEvent.key`) to an action
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" | "Delete" => Some(Self::Delete),
            "." => Some(Self::Decimal),
            _ => {
                let mut chars = key.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Self::from_script_char(ch)
            }
        }
    }

    /// Maps a single character of a key script to an action
    fn from_script_char(ch: char) -> Option<Self> {
        if let Some(d) = ch.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match ch {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '<' => Some(Self::Delete),
            _ => Operation::from_symbol(ch).map(Self::Operator),
        }
    }
}

/// Parses a key script such as `"12+3.5="` into actions.
///
/// One character per key, whitespace ignored, `<` deletes, `c` clears.
pub fn parse_key_sequence(keys: &str) -> CalcResult<Vec<KeypadAction>> {
    keys.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            KeypadAction::from_script_char(ch).ok_or_else(|| CalcError::UnknownKey(ch.to_string()))
        })
        .collect()
}
