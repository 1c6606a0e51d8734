//! Core calculator: operators, input buffer, formatting, engine and tape
//!
//! Everything in here is platform independent. Display adapters (mock DOM,
//! browser, command line) sit on top and only read [`engine::CalculatorEngine::display`].

mod action;
pub mod buffer;
pub mod engine;
pub mod format;
mod operations;
pub mod tape;

pub use action::{parse_key_sequence, KeypadAction};
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// None of these escape the engine's keypad operations; division by zero is
/// turned into the "Error" display. They are returned by the helper APIs
/// around the engine (key scripts, tape import, configuration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// A key in a scripted sequence has no keypad action
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// Tape (de)serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
    /// Configuration value rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        let err = CalcError::UnknownKey("q".into());
        assert_eq!(format!("{err}"), "Unknown key: \"q\"");
    }

    #[test]
    fn test_calc_error_display_serialization() {
        let err = CalcError::Serialization("eof".into());
        assert_eq!(format!("{err}"), "Serialization failed: eof");
    }

    #[test]
    fn test_calc_error_display_invalid_config() {
        let err = CalcError::InvalidConfig("max_input_len must be positive".into());
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_calc_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CalcError = json_err.into();
        assert!(matches!(err, CalcError::Serialization(_)));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
