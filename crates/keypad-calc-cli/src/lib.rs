//! keycalc: command-line front end for the keypad calculator
//!
//! Replays key scripts (`"12+3.5="`) through a fresh engine and prints the
//! display, the per-key steps, the tape or a JSON summary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, KeysArgs, RunArgs};
pub use config::{load_engine_config, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Printer;
pub use runner::{ReplayReport, ReplayRunner, StepRecord};
