//! Translates raw typed input into calculator operations.
//!
//! This is the only place free-form text meets the core: a line is scanned
//! left to right into [`Op`]s, with function names matched longest-first so
//! `sinh` wins over `sin`. Characters with no mapping are skipped.

use tally::{Op, PAREN_FUNCTIONS};

/// Recognized multi-character tokens, longest first.
const FUNCTION_NAMES: &[&str] = &[
    "asinh", "acosh", "atanh", "asin", "acos", "atan", "sinh", "cosh", "tanh", "sqrt", "cbrt",
    "sin", "cos", "tan", "exp", "log", "ln", "pi", "e",
];

pub fn parse_line(line: &str) -> Vec<Op> {
    let chars: Vec<char> = line.chars().collect();
    let mut ops = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() {
            ops.push(Op::Digit(c));
            i += 1;
            continue;
        }

        match c {
            '+' | '-' | '^' | '×' | '÷' => ops.push(Op::Operator(c)),
            '*' => ops.push(Op::Operator('×')),
            '/' => ops.push(Op::Operator('÷')),
            '(' | ')' => ops.push(Op::Parenthesis(c)),
            '.' => ops.push(Op::Decimal),
            '%' => ops.push(Op::Percent),
            '!' => ops.push(Op::Function("!".to_string())),
            'π' => ops.push(Op::Function("pi".to_string())),
            '=' => ops.push(Op::Calculate),
            _ => {
                if let Some(name) = match_function(&chars[i..]) {
                    let mut consumed = name.len();
                    // The state machine opens the parenthesis itself; eat
                    // the one the user typed.
                    if PAREN_FUNCTIONS.contains(&name) && chars.get(i + consumed) == Some(&'(') {
                        consumed += 1;
                    }
                    ops.push(Op::Function(name.to_string()));
                    i += consumed;
                    continue;
                }
                // Whitespace or an unmapped character: skip it.
            }
        }
        i += 1;
    }
    ops
}

fn match_function(input: &[char]) -> Option<&'static str> {
    FUNCTION_NAMES.iter().copied().find(|name| {
        name.chars()
            .enumerate()
            .all(|(j, c)| input.get(j) == Some(&c))
    })
}
