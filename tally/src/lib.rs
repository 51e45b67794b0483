//! # Tally
//!
//! **A scientific calculator you drive one keypress at a time**
//!
//! Tally turns calculator-style input (display glyphs, implicit
//! multiplication, degree-mode trigonometry, postfix operators like `!` and
//! `%`) into plain arithmetic, evaluates it, and keeps a bounded history of
//! accepted calculations.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::{Calculator, Op};
//!
//! let mut calculator = Calculator::new();
//! for op in [Op::Digit('2'), Op::Operator('+'), Op::Digit('2'), Op::Calculate] {
//!     calculator.apply(op);
//! }
//! assert_eq!(calculator.state().result, "4");
//! ```
//!
//! ## Core Concepts
//!
//! ### Expression pipeline
//! The text the user builds is *calculator notation*. Before evaluation it
//! is rewritten into evaluator-ready arithmetic: glyph substitution, power
//! and factorial rewrites, degree-mode trig wrapping, and implicit
//! multiplication insertion, in that order.
//!
//! ### Input state machine
//! [`Calculator`] holds the editable expression, the last result, and the
//! angle mode. Every editing operation is infallible; only `Calculate` can
//! fail, and failures are stored as a classified error message.
//!
//! ### History
//! Accepted calculations land in a newest-first [`History`] capped at 50
//! entries. Persistence is the caller's concern; the store only hands out
//! snapshots.

pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod preprocess;
pub mod state;

pub use engine::Engine;
pub use error::CalcError;
pub use history::{History, HistoryItem, HISTORY_CAPACITY};
pub use preprocess::preprocess;
pub use state::{AngleMode, Calculator, CalculatorState, Op, PAREN_FUNCTIONS};

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests;
