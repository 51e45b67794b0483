//! The evaluation engine: preprocess, evaluate, format, classify.

use std::f64::consts::PI;

use crate::error::CalcError;
use crate::format::{self, format_value};
use crate::preprocess::preprocess;
use crate::state::AngleMode;

/// Evaluates calculator-notation expressions.
///
/// Wraps the external arithmetic evaluator behind a narrow seam: the engine
/// hands it preprocessed text and turns any failure into a [`CalcError`],
/// so no raw evaluator message ever reaches the caller. The angle mode is
/// an explicit parameter to [`Engine::calculate`]; the engine itself keeps
/// no mutable configuration.
pub struct Engine {
    context: meval::Context<'static>,
}

impl Default for Engine {
    fn default() -> Self {
        let mut context = meval::Context::new();
        // Functions the evaluator does not ship with. `log` is the base-10
        // logarithm, matching the button pad; `ln` is built in.
        context.func("log", f64::log10);
        context.func("cbrt", f64::cbrt);
        context.func("factorial", factorial);
        Self { context }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `expression` under `mode` and format the result for display.
    ///
    /// An infinite result is reported as [`CalcError::DivisionByZero`]; NaN
    /// flows through the success path as the display sentinel.
    pub fn calculate(&self, expression: &str, mode: AngleMode) -> Result<String, CalcError> {
        let prepared = preprocess(expression, mode);

        if !format::parentheses_balanced(&prepared) {
            return Err(CalcError::UnbalancedParentheses);
        }

        let parsed: meval::Expr = prepared.parse().map_err(|e| classify(&e))?;
        let value = parsed
            .eval_with_context(&self.context)
            .map_err(|e| classify(&e))?;

        if value.is_infinite() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(format_value(value))
    }
}

/// Classify an evaluator failure into the fixed error taxonomy.
fn classify(error: &meval::Error) -> CalcError {
    if let meval::Error::UnknownVariable(_) = error {
        return CalcError::UndefinedSymbol;
    }

    let message = error.to_string().to_lowercase();
    if message.contains("unknown") {
        CalcError::UndefinedSymbol
    } else if message.contains("parenthes") {
        CalcError::UnbalancedParentheses
    } else if message.contains("operand") || message.contains("argument") {
        CalcError::MissingValue
    } else if message.contains("unexpected") {
        CalcError::Syntax
    } else {
        CalcError::Calculation
    }
}

/// Factorial extended to the reals through the gamma function, so decimal
/// arguments evaluate instead of erroring. Out-of-domain inputs yield NaN,
/// which the formatter turns into the display sentinel.
fn factorial(n: f64) -> f64 {
    if n.is_nan() || (n < 0.0 && n.fract() == 0.0) {
        return f64::NAN;
    }
    if n.fract() == 0.0 && n <= 170.0 {
        return (1..=n as u64).map(|i| i as f64).product();
    }
    gamma(n + 1.0)
}

/// Lanczos approximation, g = 7, n = 9.
fn gamma(x: f64) -> f64 {
    const COEFFICIENTS: [f64; 9] = [
        0.999_999_999_999_809_93,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_13,
        -176.615_029_162_140_59,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_571_6e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection formula for the left half-plane.
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }

    let x = x - 1.0;
    let mut acc = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS.iter().enumerate().skip(1) {
        acc += c / (x + i as f64);
    }
    let t = x + 7.5;
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * acc
}
