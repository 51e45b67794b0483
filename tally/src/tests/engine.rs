use crate::engine::Engine;
use crate::error::CalcError;
use crate::state::AngleMode;

fn calc(expression: &str, mode: AngleMode) -> Result<String, CalcError> {
    Engine::new().calculate(expression, mode)
}

#[test]
fn test_basic_arithmetic() {
    assert_eq!(calc("2+2", AngleMode::Deg).unwrap(), "4");
    assert_eq!(calc("6×7", AngleMode::Deg).unwrap(), "42");
    assert_eq!(calc("1÷4", AngleMode::Deg).unwrap(), "0.25");
    assert_eq!(calc("2^10", AngleMode::Deg).unwrap(), "1024");
}

#[test]
fn test_constants_and_implicit_multiplication() {
    assert_eq!(calc("2π", AngleMode::Rad).unwrap(), "6.28318530718");
    assert_eq!(calc("2(3+4)", AngleMode::Deg).unwrap(), "14");
}

#[test]
fn test_degree_mode_trig() {
    assert_eq!(calc("sin(30)", AngleMode::Deg).unwrap(), "0.5");
    assert_eq!(calc("cos(60)", AngleMode::Deg).unwrap(), "0.5");
    assert_eq!(calc("tan(45)", AngleMode::Deg).unwrap(), "1");
}

#[test]
fn test_degree_mode_inverse_trig() {
    assert_eq!(calc("asin(0.5)", AngleMode::Deg).unwrap(), "30");
    assert_eq!(calc("atan(1)", AngleMode::Deg).unwrap(), "45");
}

#[test]
fn test_radian_mode_trig() {
    assert_eq!(calc("sin(π÷2)", AngleMode::Rad).unwrap(), "1");
    assert_eq!(calc("cos(0)", AngleMode::Rad).unwrap(), "1");
}

#[test]
fn test_named_functions() {
    assert_eq!(calc("sqrt(16)", AngleMode::Deg).unwrap(), "4");
    assert_eq!(calc("cbrt(27)", AngleMode::Deg).unwrap(), "3");
    assert_eq!(calc("log(100)", AngleMode::Deg).unwrap(), "2");
    assert_eq!(calc("ln(1)", AngleMode::Deg).unwrap(), "0");
    assert_eq!(calc("exp(0)", AngleMode::Deg).unwrap(), "1");
}

#[test]
fn test_factorial() {
    assert_eq!(calc("5!", AngleMode::Deg).unwrap(), "120");
    assert_eq!(calc("0!", AngleMode::Deg).unwrap(), "1");
    // Gamma extension: 3.5! = gamma(4.5)
    assert_eq!(calc("3.5!", AngleMode::Deg).unwrap(), "11.6317283966");
}

#[test]
fn test_power_button_rewrites() {
    assert_eq!(calc("3x^2", AngleMode::Deg).unwrap(), "9");
    assert_eq!(calc("2x^3", AngleMode::Deg).unwrap(), "8");
    assert_eq!(calc("10^x2", AngleMode::Deg).unwrap(), "100");
}

#[test]
fn test_division_by_zero_is_classified() {
    assert_eq!(calc("5÷0", AngleMode::Deg), Err(CalcError::DivisionByZero));
    assert_eq!(calc("5/0", AngleMode::Deg), Err(CalcError::DivisionByZero));
}

#[test]
fn test_nan_uses_display_sentinel() {
    // 0/0 is NaN, an in-band result rather than an evaluator failure.
    assert_eq!(calc("0÷0", AngleMode::Deg).unwrap(), "Error");
}

#[test]
fn test_unbalanced_parentheses_are_classified() {
    assert_eq!(
        calc("(2+3", AngleMode::Deg),
        Err(CalcError::UnbalancedParentheses)
    );
    assert_eq!(
        calc("2+3)", AngleMode::Deg),
        Err(CalcError::UnbalancedParentheses)
    );
}

#[test]
fn test_undefined_symbol_is_classified() {
    assert_eq!(
        calc("2+foo", AngleMode::Deg),
        Err(CalcError::UndefinedSymbol)
    );
}

#[test]
fn test_malformed_input_never_leaks_raw_errors() {
    // Whatever the evaluator says, the caller sees a taxonomy entry.
    for bad in ["2+", "×2", "2@2"] {
        let err = calc(bad, AngleMode::Deg).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Syntax
                | CalcError::MissingValue
                | CalcError::Calculation
                | CalcError::UndefinedSymbol
        ));
    }
}

#[test]
fn test_error_messages_are_fixed_strings() {
    assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
        CalcError::UnbalancedParentheses.to_string(),
        "Unbalanced parentheses"
    );
}
