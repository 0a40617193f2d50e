mod format;
mod history;

pub use format::format_result;
pub use history::{History, HistoryEntry};

use crate::error::{EvaluationError, InputError};
use crate::evaluate;
use log::{debug, warn};

const OPERATORS: &str = "+-*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Longest input line accepted from `append`.
    pub max_input_len: usize,
    /// Number of results kept in the history.
    pub history_limit: usize,
    /// Fractional digits kept when formatting a result.
    pub display_precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_input_len: 24,
            history_limit: 10,
            display_precision: 12,
        }
    }
}

/// State behind a calculator display: the input line being edited, the last
/// shown result and the history of completed calculations.
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    input: String,
    result: Option<String>,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            input: "0".to_string(),
            result: None,
            history: History::new(config.history_limit),
        }
    }

    /// Replaces the history, e.g. with entries loaded from storage.
    pub fn restore_history<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = HistoryEntry>,
    {
        self.history = History::from_entries(entries, self.config.history_limit);
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Appends a key press (digit, operator, `.`, `(` or `)`) to the input line.
    pub fn append(&mut self, token: &str) -> Result<(), InputError> {
        if token.is_empty() {
            return Ok(());
        }

        let current_len = if self.input == "0" { 0 } else { self.input.chars().count() };
        if current_len + token.chars().count() > self.config.max_input_len {
            warn!("Input rejected, length limit {}", self.config.max_input_len);
            return Err(InputError::TooLong {
                max: self.config.max_input_len,
            });
        }

        let awaiting_operand = self.input == "0" || self.input.ends_with('(');
        if OPERATORS.contains(token) && awaiting_operand {
            if token != "-" {
                warn!("Operator '{}' rejected without a leading operand", token);
                return Err(InputError::MissingOperand);
            }
            let next = if self.input == "0" {
                token.to_string()
            } else {
                format!("{}{}", self.input, token)
            };
            self.set_input(&next);
            return Ok(());
        }

        if self.input == "0" && token.chars().any(|c| c.is_ascii_digit()) {
            self.set_input(token);
            return Ok(());
        }

        let next = format!("{}{}", self.input, token);
        self.set_input(&next);
        Ok(())
    }

    /// Removes the last character of the input line.
    pub fn clear_entry(&mut self) {
        let mut next = self.input.clone();
        if next.chars().count() <= 1 {
            next.clear();
        } else {
            next.pop();
        }
        self.set_input(&next);
    }

    /// Resets the input line and the shown result. History is kept.
    pub fn clear_all(&mut self) {
        self.set_input("0");
        self.result = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Evaluates the input line. On success the formatted result is shown and
    /// recorded in the history; on failure the shown result is cleared and the
    /// input line is left untouched.
    pub fn equals(&mut self) -> Result<String, EvaluationError> {
        match evaluate(&self.input) {
            Ok(value) => {
                let formatted = format_result(value, self.config.display_precision);
                debug!("{} = {}", self.input, formatted);
                self.history
                    .push(HistoryEntry::new(self.input.clone(), formatted.clone()));
                self.result = Some(formatted.clone());
                Ok(formatted)
            }
            Err(err) => {
                warn!("Evaluation of '{}' failed: {}", self.input, err);
                self.result = None;
                Err(err)
            }
        }
    }

    /// Puts a history entry back on the display. Returns `false` if there is
    /// no entry at `index`.
    pub fn recall(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index).cloned() else {
            return false;
        };
        self.set_input(&entry.expression);
        self.result = Some(entry.result);
        true
    }

    fn set_input(&mut self, next: &str) {
        let trimmed = next.trim();
        self.input = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
