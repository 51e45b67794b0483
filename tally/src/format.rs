//! Display formatting for numeric results and expression text.

/// Sentinel shown in place of a result when the evaluator produced a
/// non-finite value. Presented through the normal success path, not as an
/// error.
pub const ERROR_DISPLAY: &str = "Error";

/// Format a numeric result for display.
///
/// Non-finite values become the [`ERROR_DISPLAY`] sentinel. Magnitudes above
/// `1e10`, or non-zero magnitudes below `1e-6`, are rendered in exponential
/// notation with six fractional digits. Everything else is rounded to twelve
/// significant digits and printed through `f64`'s shortest round-trippable
/// representation, so no trailing zeros survive.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    if value.abs() > 1e10 || (value != 0.0 && value.abs() < 1e-6) {
        return format!("{:.6e}", value);
    }

    // Round to 12 significant digits, then let Display pick the shortest
    // decimal that parses back to the same f64.
    let rounded: f64 = format!("{:.11e}", value).parse().unwrap_or(value);
    rounded.to_string()
}

/// Whether every `)` closes an earlier `(` and none are left open.
pub fn parentheses_balanced(expression: &str) -> bool {
    let mut depth: i32 = 0;
    for ch in expression.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Number of `(` still waiting for a matching `)`.
pub fn unmatched_parentheses(expression: &str) -> usize {
    let mut depth: i32 = 0;
    for ch in expression.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }
    depth.max(0) as usize
}

/// Shorten a long expression for display, keeping the head and tail around
/// an ellipsis.
pub fn truncate_expression(expression: &str, max_length: usize) -> String {
    let chars: Vec<char> = expression.chars().collect();
    if chars.len() <= max_length {
        return expression.to_string();
    }

    let half = (max_length / 2).saturating_sub(2);
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}
