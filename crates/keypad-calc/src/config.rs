//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::core::tape::Tape;
use crate::core::{CalcError, CalcResult};

/// What the division-by-zero result becomes once it is on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// "Error" is a distinct state that the next digit replaces. Decimal,
    /// delete and operators treat it as the text "Error" (parsed as NaN).
    #[default]
    Reset,
    /// "Error" is ordinary buffer text: digits append to it and it parses as NaN.
    Legacy,
}

/// Calculator engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Completed evaluations kept on the tape (0 disables the tape)
    pub tape_capacity: usize,
    /// Optional cap on typed characters; `None` accepts any length
    pub max_input_len: Option<usize>,
    /// Continuation rule for the error display
    pub error_policy: ErrorPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tape_capacity: Tape::DEFAULT_CAPACITY,
            max_input_len: None,
            error_policy: ErrorPolicy::Reset,
        }
    }
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }

    /// Set the typed-character cap
    #[must_use]
    pub const fn with_max_input_len(mut self, max_input_len: Option<usize>) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set the error continuation policy
    #[must_use]
    pub const fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Rejects settings the engine cannot honor
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_input_len == Some(0) {
            return Err(CalcError::InvalidConfig(
                "max_input_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
