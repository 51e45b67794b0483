//! The input state machine: one operation per logical keypress.
//!
//! Editing operations never fail; premature or invalid input is absorbed as
//! a no-op. Only [`Op::Calculate`] can fail, and a failure is stored in the
//! state as a classified message while the expression stays editable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::history::{History, HistoryItem};
use crate::preprocess::trailing_number_start;

/// Whether trigonometric arguments and results are degrees or radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Deg => AngleMode::Rad,
            AngleMode::Rad => AngleMode::Deg,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Deg => write!(f, "DEG"),
            AngleMode::Rad => write!(f, "RAD"),
        }
    }
}

/// Function names that open a parenthesis when entered. Everything else
/// (`x^2`, `x^3`, `10^x`, `!`, `pi`, `e`) is appended verbatim.
pub const PAREN_FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "asinh", "acosh",
    "atanh", "ln", "log", "sqrt", "cbrt", "exp",
];

/// Binary operators as they appear in the display text.
const OPERATORS: [char; 5] = ['+', '-', '×', '÷', '^'];

/// One logical keypress. The UI-facing mapping layer translates raw input
/// into these before touching the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Digit(char),
    Operator(char),
    Function(String),
    Decimal,
    Parenthesis(char),
    Percent,
    ToggleSign,
    Backspace,
    Clear,
    ClearEntry,
    Calculate,
    ToggleAngleMode,
    LoadHistory(HistoryItem),
    ClearHistory,
}

/// Snapshot of the editable calculator session.
///
/// `result` and `error` are mutually exclusive: at most one is non-empty at
/// any time. `is_new_calculation` marks that the next digit or decimal
/// starts a fresh expression instead of appending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub expression: String,
    pub result: String,
    pub error: Option<String>,
    pub angle_mode: AngleMode,
    pub is_new_calculation: bool,
    pub last_operator: Option<char>,
}

/// The calculator session: state, evaluation engine, and history.
pub struct Calculator {
    state: CalculatorState,
    engine: Engine,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_history(History::new())
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a previously persisted history.
    pub fn with_history(history: History) -> Self {
        Self {
            state: CalculatorState::default(),
            engine: Engine::new(),
            history,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Single entry point: dispatch one keypress to its transition.
    pub fn apply(&mut self, op: Op) {
        match op {
            Op::Digit(d) => self.input_digit(d),
            Op::Operator(o) => self.input_operator(o),
            Op::Function(name) => self.input_function(&name),
            Op::Decimal => self.input_decimal(),
            Op::Parenthesis(p) => self.input_parenthesis(p),
            Op::Percent => self.input_percent(),
            Op::ToggleSign => self.toggle_sign(),
            Op::Backspace => self.backspace(),
            Op::Clear => self.clear(),
            Op::ClearEntry => self.clear_entry(),
            Op::Calculate => self.calculate(),
            Op::ToggleAngleMode => self.toggle_angle_mode(),
            Op::LoadHistory(item) => self.load_from_history(&item),
            Op::ClearHistory => self.clear_history(),
        }
    }

    pub fn input_digit(&mut self, digit: char) {
        if self.state.is_new_calculation {
            self.state.expression = digit.to_string();
            self.state.result.clear();
            self.state.is_new_calculation = false;
        } else {
            self.state.expression.push(digit);
        }
        self.state.error = None;
    }

    pub fn input_operator(&mut self, op: char) {
        if self.state.expression.is_empty() && !self.state.result.is_empty() {
            // Continue calculating with the previous result.
            self.state.expression = self.state.result.clone();
        }
        if self.state.expression.is_empty() {
            return;
        }
        if self.state.expression.ends_with(OPERATORS) {
            self.state.expression.pop();
        }
        self.state.expression.push(op);
        self.state.is_new_calculation = false;
        self.state.last_operator = Some(op);
        self.state.error = None;
    }

    pub fn input_function(&mut self, name: &str) {
        if self.state.is_new_calculation {
            self.state.expression.clear();
        }
        self.state.expression.push_str(name);
        if PAREN_FUNCTIONS.contains(&name) {
            self.state.expression.push('(');
        }
        self.state.is_new_calculation = false;
        self.state.error = None;
    }

    pub fn input_decimal(&mut self) {
        if self.state.is_new_calculation {
            self.state.expression = "0.".to_string();
            self.state.result.clear();
            self.state.is_new_calculation = false;
            self.state.error = None;
            return;
        }

        // The number being typed already has a decimal point.
        if let Some(start) = trailing_number_start(&self.state.expression) {
            if self.state.expression[start..].contains('.') {
                return;
            }
        }

        if self.state.expression.is_empty()
            || self.state.expression.ends_with(OPERATORS)
            || self.state.expression.ends_with('(')
        {
            self.state.expression.push_str("0.");
        } else {
            self.state.expression.push('.');
        }
        self.state.error = None;
    }

    pub fn input_parenthesis(&mut self, paren: char) {
        self.state.expression.push(paren);
        self.state.is_new_calculation = false;
        self.state.error = None;
    }

    /// Replace the trailing number `n` with `(n/100)`.
    pub fn input_percent(&mut self) {
        self.replace_trailing_number(|n| format!("({n}/100)"));
    }

    /// Replace the trailing number `n` with `(-n)`.
    pub fn toggle_sign(&mut self) {
        self.replace_trailing_number(|n| format!("(-{n})"));
    }

    fn replace_trailing_number(&mut self, rewrite: impl Fn(&str) -> String) {
        let Some(start) = trailing_number_start(&self.state.expression) else {
            return;
        };
        let number = self.state.expression[start..].to_string();
        self.state.expression.truncate(start);
        let rewritten = rewrite(&number);
        self.state.expression.push_str(&rewritten);
        self.state.error = None;
    }

    pub fn backspace(&mut self) {
        if self.state.expression.is_empty() {
            return;
        }
        self.state.expression.pop();
        self.state.error = None;
    }

    pub fn clear(&mut self) {
        self.state.expression.clear();
        self.state.result.clear();
        self.state.error = None;
        self.state.last_operator = None;
        self.state.is_new_calculation = false;
    }

    pub fn clear_entry(&mut self) {
        self.state.expression.clear();
        self.state.error = None;
    }

    /// Evaluate the current expression under the session's angle mode.
    ///
    /// Success stores the formatted result and appends a history entry in
    /// the same step; failure stores the classified message and leaves the
    /// expression untouched so the user can correct it.
    pub fn calculate(&mut self) {
        if self.state.expression.is_empty() {
            return;
        }
        match self
            .engine
            .calculate(&self.state.expression, self.state.angle_mode)
        {
            Ok(result) => {
                self.history.push(HistoryItem::new(
                    self.state.expression.clone(),
                    result.clone(),
                    self.state.angle_mode,
                ));
                self.state.result = result;
                self.state.error = None;
                self.state.is_new_calculation = true;
            }
            Err(error) => {
                self.state.error = Some(error.to_string());
                self.state.result.clear();
            }
        }
    }

    pub fn toggle_angle_mode(&mut self) {
        self.state.angle_mode = self.state.angle_mode.toggled();
    }

    pub fn load_from_history(&mut self, item: &HistoryItem) {
        self.state.expression = item.expression.clone();
        self.state.result = item.result.clone();
        self.state.angle_mode = item.mode;
        self.state.error = None;
        self.state.is_new_calculation = false;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
