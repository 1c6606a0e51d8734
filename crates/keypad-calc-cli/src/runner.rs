//! Key script replay

use keypad_calc::config::EngineConfig;
use keypad_calc::core::engine::CalculatorEngine;
use keypad_calc::core::format::format_number;
use keypad_calc::core::tape::Tape;
use keypad_calc::core::{parse_key_sequence, KeypadAction};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Display after one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Button label of the key pressed
    pub key: String,
    /// Display text after the key
    pub display: String,
}

/// Outcome of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Final display text
    pub display: String,
    /// Pending operation as `"<first operand> <operator>"`, if any
    pub pending: Option<String>,
    /// Completed evaluations, oldest first
    pub tape: Tape,
    /// Per-key displays (empty unless steps were requested)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepRecord>,
}

/// Replays key scripts on a fresh engine
#[derive(Debug, Clone, Default)]
pub struct ReplayRunner {
    config: EngineConfig,
    record_steps: bool,
}

impl ReplayRunner {
    /// Creates a runner for the given engine configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            config,
            record_steps: false,
        }
    }

    /// Record the display after every key
    #[must_use]
    pub const fn with_steps(mut self, record_steps: bool) -> Self {
        self.record_steps = record_steps;
        self
    }

    /// Parses and replays `keys`
    pub fn run(&self, keys: &str) -> CliResult<ReplayReport> {
        let actions = parse_key_sequence(keys)?;
        if actions.is_empty() {
            return Err(CliError::invalid_argument("key script has no keys"));
        }
        Ok(self.replay(&actions))
    }

    /// Replays already-parsed actions
    #[must_use]
    pub fn replay(&self, actions: &[KeypadAction]) -> ReplayReport {
        info!(keys = actions.len(), "replaying key script");
        let mut engine = CalculatorEngine::with_config(self.config.clone());
        let mut steps = Vec::new();

        for &action in actions {
            engine.press(action);
            debug!(key = %action.label(), display = engine.display(), "key pressed");
            if self.record_steps {
                steps.push(StepRecord {
                    key: action.label(),
                    display: engine.display().to_string(),
                });
            }
        }

        let report = ReplayReport {
            display: engine.display().to_string(),
            pending: engine
                .pending()
                .map(|p| format!("{} {}", format_number(p.first_operand), p.operation)),
            tape: engine.tape().clone(),
            steps,
        };
        info!(display = %report.display, evaluations = report.tape.len(), "replay finished");
        report
    }
}
