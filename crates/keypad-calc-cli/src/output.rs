//! Terminal output

use console::{style, Term};
use keypad_calc::core::tape::{Tape, TapeEntry};
use keypad_calc::wasm::WasmKeypad;

use crate::error::CliResult;
use crate::runner::{ReplayReport, StepRecord};

/// Writes command results to stdout
#[derive(Debug)]
pub struct Printer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode: results only, no headings
    pub quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Prints a replay in text form
    pub fn report(&self, report: &ReplayReport, show_tape: bool) -> CliResult<()> {
        for (index, step) in report.steps.iter().enumerate() {
            self.line(&self.format_step(index + 1, step))?;
        }
        if show_tape {
            self.heading("Tape")?;
            if report.tape.is_empty() {
                self.line("(empty)")?;
            } else {
                self.line(&self.format_tape(&report.tape))?;
            }
            self.heading("Display")?;
        }
        self.line(&self.format_display(&report.display))
    }

    /// Prints a replay as pretty JSON
    pub fn report_json(&self, report: &ReplayReport) -> CliResult<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.line(&json)
    }

    /// Prints the keypad grid, optionally with ids and handlers
    pub fn keypad(&self, keypad: &WasmKeypad, handlers: bool) -> CliResult<()> {
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            let cells: Vec<String> = (0..cols)
                .filter_map(|col| keypad.get_button_at(row, col))
                .map(|btn| format!("[{:^5}]", btn.action.label()))
                .collect();
            self.line(cells.join(" ").trim_end())?;
        }
        if handlers {
            self.heading("Buttons")?;
            for btn in keypad.buttons() {
                self.line(&format!(
                    "{:<5} {:<13} {}",
                    btn.action.label(),
                    btn.id,
                    btn.action.handler()
                ))?;
            }
        }
        Ok(())
    }

    /// Prints a block of preformatted text verbatim
    pub fn raw(&self, text: &str) -> CliResult<()> {
        self.term.write_str(text)?;
        Ok(())
    }

    fn format_step(&self, number: usize, step: &StepRecord) -> String {
        let key = format!("{:>3}", step.key);
        if self.use_color {
            format!(
                "{:>3}. {} -> {}",
                number,
                style(key).cyan().force_styling(true),
                step.display
            )
        } else {
            format!("{number:>3}. {key} -> {}", step.display)
        }
    }

    fn format_tape(&self, tape: &Tape) -> String {
        if !self.use_color {
            return tape.export_formatted();
        }
        tape.iter()
            .map(Self::format_tape_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_tape_entry(entry: &TapeEntry) -> String {
        format!(
            "{} = {}",
            entry.expression,
            style(&entry.result).green().force_styling(true)
        )
    }

    fn format_display(&self, display: &str) -> String {
        if self.use_color {
            style(display).bold().force_styling(true).to_string()
        } else {
            display.to_string()
        }
    }

    fn heading(&self, text: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let text = if self.use_color {
            style(format!("{text}:")).dim().force_styling(true).to_string()
        } else {
            format!("{text}:")
        };
        self.line(&text)
    }

    fn line(&self, text: &str) -> CliResult<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}
