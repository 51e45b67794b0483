//! Rewrites calculator-notation text into evaluator-ready arithmetic.
//!
//! Four stages run in a fixed order, each over the whole string:
//!
//! 1. display glyphs (`×`, `÷`, `π`) become their plain-text equivalents;
//! 2. calculator-specific fragments (`x^2`, `x^3`, `10^x`, literal `!`) are
//!    rewritten into ordinary arithmetic;
//! 3. in degree mode, trig calls are wrapped so arguments (direct) or
//!    results (inverse) are converted between degrees and radians;
//! 4. implicit multiplication is made explicit.
//!
//! Function rewrites run before degree wrapping so the wrapping sees real
//! arguments, and implicit multiplication runs last so it cannot corrupt
//! function names or the just-inserted wrapping syntax.

use std::sync::LazyLock;

use regex::Regex;

use crate::state::AngleMode;

static FACTORIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*!").expect("factorial pattern compiles"));

// A digit or `)` directly followed by a letter or `(`.
static IMPLICIT_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9)])([A-Za-z(])").expect("implicit pattern compiles"));

// `)` directly followed by a digit.
static IMPLICIT_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)([0-9])").expect("implicit pattern compiles"));

/// Rewrite `raw` into text the arithmetic evaluator accepts. Pure; the only
/// configuration is the angle mode.
pub fn preprocess(raw: &str, mode: AngleMode) -> String {
    let mut text = substitute_symbols(raw);
    text = rewrite_functions(&text);
    if mode == AngleMode::Deg {
        text = wrap_trig_degrees(&text);
    }
    insert_implicit_multiplication(&text)
}

fn substitute_symbols(text: &str) -> String {
    text.replace('×', "*").replace('÷', "/").replace('π', "pi")
}

fn rewrite_functions(text: &str) -> String {
    let mut out = rewrite_postfix_power(text, "x^2", "2");
    out = rewrite_postfix_power(&out, "x^3", "3");
    out = rewrite_ten_power(&out);
    FACTORIAL_RE.replace_all(&out, "factorial($1)").into_owned()
}

/// `5x^2` -> `(5)^2`, `(1+2)x^3` -> `((1+2))^3`. With no operand to the
/// left the fragment is left alone: the user has not finished typing.
fn rewrite_postfix_power(text: &str, pattern: &str, exponent: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(pattern) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + pattern.len()..];
        match trailing_operand_start(&out) {
            Some(start) => {
                let operand = out[start..].to_string();
                out.truncate(start);
                out.push('(');
                out.push_str(&operand);
                out.push_str(")^");
                out.push_str(exponent);
            }
            None => out.push_str(pattern),
        }
    }
    out.push_str(rest);
    out
}

/// `10^x3` -> `10^(3)`, `10^x(1+2)` -> `10^((1+2))`. Deferred when nothing
/// follows yet.
fn rewrite_ten_power(text: &str) -> String {
    const PATTERN: &str = "10^x";
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(PATTERN) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + PATTERN.len()..];
        match leading_operand_len(rest) {
            Some(len) => {
                out.push_str("10^(");
                out.push_str(&rest[..len]);
                out.push(')');
                rest = &rest[len..];
            }
            None => out.push_str(PATTERN),
        }
    }
    out.push_str(rest);
    out
}

/// Degree-mode wrapping for the six trig functions.
///
/// Inverse names are rewritten first, and a name only matches when the
/// preceding character is not a letter, so `sin(` never fires inside
/// `asin(`. Single pass: an argument that itself contains parentheses is
/// left unconverted.
fn wrap_trig_degrees(text: &str) -> String {
    const INVERSE: [&str; 3] = ["asin", "acos", "atan"];
    const DIRECT: [&str; 3] = ["sin", "cos", "tan"];

    let mut out = text.to_string();
    for name in INVERSE {
        out = wrap_trig_calls(&out, name, true);
    }
    for name in DIRECT {
        out = wrap_trig_calls(&out, name, false);
    }
    out
}

fn wrap_trig_calls(text: &str, name: &str, inverse: bool) -> String {
    let needle = format!("{name}(");
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(&needle) {
        let before = &rest[..pos];
        let after = &rest[pos + needle.len()..];
        let preceding = before.chars().last().or_else(|| out.chars().last());

        // Part of a longer identifier (`asin`, `sinh`): not a call to `name`.
        if preceding.is_some_and(|c| c.is_ascii_alphabetic()) {
            out.push_str(before);
            out.push_str(&needle);
            rest = after;
            continue;
        }

        match after.find(['(', ')']) {
            Some(end) if after.as_bytes()[end] == b')' && end > 0 => {
                let inner = &after[..end];
                // Already converted on an earlier pass: keeps the whole
                // pipeline idempotent.
                if inverse && after[end + 1..].starts_with(" * 180 / pi") {
                    out.push_str(before);
                    out.push_str(&needle);
                    rest = after;
                    continue;
                }
                out.push_str(before);
                if inverse {
                    out.push_str(&format!("({name}({inner}) * 180 / pi)"));
                } else {
                    out.push_str(&format!("{name}(({inner}) * pi / 180)"));
                }
                rest = &after[end + 1..];
            }
            // Nested or unterminated argument: leave the call untouched.
            _ => {
                out.push_str(before);
                out.push_str(&needle);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn insert_implicit_multiplication(text: &str) -> String {
    let out = IMPLICIT_VALUE_RE.replace_all(text, "$1*$2");
    IMPLICIT_CLOSE_RE.replace_all(&out, ")*$1").into_owned()
}

/// Byte index where the trailing operand of `text` starts: the longest
/// trailing run of digits with at most one decimal point, or one balanced
/// parenthesized group. `None` when the text does not end in an operand.
pub(crate) fn trailing_operand_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.last() == Some(&b')') {
        let mut depth = 0i32;
        for (i, &b) in bytes.iter().enumerate().rev() {
            match b {
                b')' => depth += 1,
                b'(' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        return None;
    }
    trailing_number_start(text)
}

/// Like [`trailing_operand_start`] but numeric runs only.
pub(crate) fn trailing_number_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut start = bytes.len();
    let mut seen_dot = false;
    let mut has_digit = false;
    while start > 0 {
        match bytes[start - 1] {
            b if b.is_ascii_digit() => {
                has_digit = true;
                start -= 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                start -= 1;
            }
            _ => break,
        }
    }
    (has_digit && start < bytes.len()).then_some(start)
}

/// Byte length of the operand at the head of `text`: leading digits with at
/// most one decimal point, or one balanced parenthesized group.
pub(crate) fn leading_operand_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() == Some(&b'(') {
        let mut depth = 0i32;
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            }
        }
        return None;
    }

    let mut len = 0;
    let mut seen_dot = false;
    let mut has_digit = false;
    while len < bytes.len() {
        match bytes[len] {
            b if b.is_ascii_digit() => {
                has_digit = true;
                len += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                len += 1;
            }
            _ => break,
        }
    }
    (has_digit && len > 0).then_some(len)
}
