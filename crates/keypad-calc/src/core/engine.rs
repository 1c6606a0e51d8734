//! Calculator engine: the sequential operator state machine
//!
//! The engine holds the input buffer and at most one pending operation. It
//! has two macro-states:
//!
//! ```text
//!            select_operator
//!   Idle ------------------------> OperatorPending
//!    ^                                   |
//!    +---- evaluate / chained operator --+
//! ```
//!
//! Digit entry, decimal entry, delete and clear never change the macro-state
//! on their own (clear always lands in `Idle`). Every keypad operation is
//! infallible: invalid calls are silent no-ops and division by zero becomes
//! the "Error" display.

use tracing::{debug, trace, warn};

use crate::config::{EngineConfig, ErrorPolicy};
use crate::core::buffer::InputBuffer;
use crate::core::format::{format_number, render, ERROR_TEXT};
use crate::core::tape::Tape;
use crate::core::{Calculator, KeypadAction, Operation};

/// An operator waiting for its second operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// The selected operator
    pub operation: Operation,
    /// Left-hand operand captured when the operator was selected
    pub first_operand: f64,
}

/// Macro-state of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No operator selected
    Idle,
    /// An operator is waiting for its second operand
    OperatorPending,
}

/// Sequential keypad calculator
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    buffer: InputBuffer,
    pending: Option<PendingOperation>,
    config: EngineConfig,
    tape: Tape,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with the given configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            buffer: InputBuffer::new(),
            pending: None,
            tape: Tape::with_capacity(config.tape_capacity),
            config,
        }
    }

    // ----- Read side -----

    /// The rendered display string ("0" for an empty buffer)
    #[must_use]
    pub fn display(&self) -> &str {
        render(&self.buffer)
    }

    /// The raw input buffer
    #[must_use]
    pub const fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// The pending operation, if any
    #[must_use]
    pub const fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// The pending operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending.map(|p| p.operation)
    }

    /// The stored first operand, if any
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.first_operand)
    }

    /// Current macro-state
    #[must_use]
    pub const fn state(&self) -> EngineState {
        if self.pending.is_some() {
            EngineState::OperatorPending
        } else {
            EngineState::Idle
        }
    }

    /// Completed evaluations
    #[must_use]
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ----- Keypad operations -----

    /// Enters a digit `'0'..='9'`; any other character is ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            trace!(%digit, "ignoring non-digit token");
            return;
        }
        if self.input_full(true) {
            trace!(%digit, "input length cap reached");
            return;
        }
        self.buffer.push_digit(digit);
        trace!(display = self.display(), "digit entered");
    }

    /// Enters a decimal point unless the buffer already has one
    pub fn append_decimal(&mut self) {
        if self.input_full(false) {
            trace!("input length cap reached");
            return;
        }
        if self.buffer.push_decimal() {
            trace!(display = self.display(), "decimal point entered");
        } else {
            trace!("decimal point already present");
        }
    }

    /// Enters a multi-character token such as `"45"` or `"."`, one key at a time.
    pub fn append_number(&mut self, token: &str) {
        for ch in token.chars() {
            if ch == '.' {
                self.append_decimal();
            } else {
                self.append_digit(ch);
            }
        }
    }

    /// Selects an operator, collapsing any pending operation first.
    pub fn select_operator(&mut self, operation: Operation) {
        if !self.buffer.has_operand() && self.pending.is_none() {
            debug!(%operation, "operator ignored: nothing entered");
            return;
        }

        if self.pending.is_some() {
            debug!(%operation, "chaining: evaluating pending operation first");
            self.evaluate();
        }

        let first_operand = self.buffer.operand();
        self.pending = Some(PendingOperation {
            operation,
            first_operand,
        });
        self.buffer.clear();
        debug!(%operation, first_operand, "operator recorded");
    }

    /// Evaluates the pending operation against the buffer.
    ///
    /// No-op without a pending operator or without a second operand.
    pub fn evaluate(&mut self) {
        let Some(pending) = self.pending else {
            trace!("evaluate ignored: no pending operator");
            return;
        };
        if !self.buffer.has_operand() {
            trace!("evaluate ignored: no second operand");
            return;
        }

        let second_operand = self.buffer.operand();
        let expression = format!(
            "{} {} {}",
            format_number(pending.first_operand),
            pending.operation,
            format_number(second_operand)
        );

        match Calculator::apply(pending.first_operand, second_operand, pending.operation) {
            Ok(value) => {
                self.buffer.set_text(format_number(value));
                debug!(%expression, result = self.display(), "evaluated");
            }
            Err(err) => {
                warn!(%expression, %err, "evaluation failed, showing error");
                self.show_error();
            }
        }

        self.pending = None;
        let result = render(&self.buffer).to_string();
        self.tape.record(expression, &result);
    }

    /// Resets the buffer and drops any pending operation
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pending = None;
        debug!("cleared");
    }

    /// Removes the last typed character; an emptied buffer shows "0".
    pub fn delete_last(&mut self) {
        let removed = self.buffer.delete_last();
        trace!(?removed, display = self.display(), "deleted last character");
    }

    /// Dispatches one keypad action
    pub fn press(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(d) => {
                if let Some(ch) = char::from_digit(u32::from(d), 10) {
                    self.append_digit(ch);
                }
            }
            KeypadAction::Decimal => self.append_decimal(),
            KeypadAction::Operator(op) => self.select_operator(op),
            KeypadAction::Equals => self.evaluate(),
            KeypadAction::Clear => self.clear(),
            KeypadAction::Delete => self.delete_last(),
        }
    }

    /// Drops all tape entries
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    fn show_error(&mut self) {
        match self.config.error_policy {
            ErrorPolicy::Reset => self.buffer.set_error(),
            ErrorPolicy::Legacy => self.buffer.set_text(ERROR_TEXT.to_string()),
        }
    }

    /// True when one more appended character would exceed the configured cap.
    /// Replacing the placeholder never counts; digits also replace "Error".
    fn input_full(&self, is_digit: bool) -> bool {
        let Some(max) = self.config.max_input_len else {
            return false;
        };
        let replaces = self.buffer.is_placeholder() || (is_digit && self.buffer.is_error());
        !replaces && self.buffer.len() >= max
    }
}
