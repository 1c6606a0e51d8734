//! Input buffer: the characters typed since the last operator or clear
//!
//! The buffer owns the editing rules (placeholder zero, single decimal point,
//! delete-to-placeholder). It knows nothing about operators; the engine
//! decides when the buffer becomes an operand.
//!
//! The error state reads as the text "Error" for every edit except digit
//! entry, which replaces it.

use crate::core::format::{parse_operand, ERROR_TEXT, PLACEHOLDER};

/// Digit-entry buffer
///
/// `Text` holds a decimal literal (possibly empty, possibly a formatted
/// result such as `"-3"` or `"1e+21"`). `Error` is the division-by-zero state;
/// the next digit replaces it, any other edit continues from "Error".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputBuffer {
    /// Typed or computed text
    Text(String),
    /// Division-by-zero error state
    Error,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for InputBuffer {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl InputBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self::Text(String::new())
    }

    /// True for the empty text buffer (not the placeholder "0")
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// True in the division-by-zero state
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// True when the buffer holds the placeholder zero
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Text(text) if text == PLACEHOLDER)
    }

    /// True when the buffer holds any content, the error state included
    #[must_use]
    pub fn has_operand(&self) -> bool {
        !self.is_empty()
    }

    /// True when the text already contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        matches!(self, Self::Text(text) if text.contains('.'))
    }

    /// Number of characters shown
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_text().chars().count()
    }

    /// Buffer text ("Error" in the error state)
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    /// Numeric value of the buffer (NaN when nothing numeric is present)
    #[must_use]
    pub fn operand(&self) -> f64 {
        match self {
            Self::Text(text) => parse_operand(text),
            Self::Error => f64::NAN,
        }
    }

    /// Enters a digit.
    ///
    /// The placeholder "0" and the error state are replaced; anything else is
    /// appended to.
    pub fn push_digit(&mut self, digit: char) {
        match self {
            Self::Text(text) if text != PLACEHOLDER => text.push(digit),
            _ => *self = Self::Text(digit.to_string()),
        }
    }

    /// Enters a decimal point. Returns false when one is already present.
    ///
    /// In the error state the point is appended to "Error".
    pub fn push_decimal(&mut self) -> bool {
        self.error_to_text();
        match self {
            Self::Text(text) if !text.contains('.') => {
                text.push('.');
                true
            }
            _ => false,
        }
    }

    /// Removes the last character, falling back to the placeholder "0".
    ///
    /// In the error state the last character of "Error" is removed.
    pub fn delete_last(&mut self) -> Option<char> {
        self.error_to_text();
        let removed = match self {
            Self::Text(text) => text.pop(),
            Self::Error => None,
        };
        if self.is_empty() {
            *self = Self::Text(PLACEHOLDER.to_string());
        }
        removed
    }

    /// Replaces the contents with a computed result
    pub fn set_text(&mut self, text: String) {
        *self = Self::Text(text);
    }

    /// Switches to the error state
    pub fn set_error(&mut self) {
        *self = Self::Error;
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Turns the error state into plain "Error" text before an edit
    fn error_to_text(&mut self) {
        if self.is_error() {
            *self = Self::from(ERROR_TEXT);
        }
    }
}
