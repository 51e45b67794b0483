//! Interactive calculator loop.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tally::{format, Calculator, History, Op};

use crate::{keymap, storage};

pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut calculator = Calculator::with_history(History::from_items(storage::load()));

    println!("tally — type an expression, :help for commands");

    loop {
        let prompt = format!("[{}]> ", calculator.state().angle_mode);
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if let Some(command) = line.strip_prefix(':') {
                    if handle_command(command, &mut calculator) {
                        break;
                    }
                    continue;
                }

                submit(line, &mut calculator);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Feed one line through the key mapping into the state machine, then
/// calculate and persist.
fn submit(line: &str, calculator: &mut Calculator) {
    let ops = keymap::parse_line(line);
    let already_calculated = ops.last() == Some(&Op::Calculate);
    for op in ops {
        calculator.apply(op);
    }
    if !already_calculated {
        calculator.apply(Op::Calculate);
    }
    render(calculator);
    storage::save(calculator.history().items());
}

fn render(calculator: &Calculator) {
    let state = calculator.state();
    let shown = format::truncate_expression(&state.expression, 60);
    match &state.error {
        Some(error) => {
            println!("{} {}", shown, format!("! {error}").red());
            let open = format::unmatched_parentheses(&state.expression);
            if open > 0 {
                println!("{}", format!("  {open} unclosed parenthesis").dimmed());
            }
        }
        None => println!("{} = {}", shown, state.result.bold()),
    }
}

/// Returns true when the loop should exit.
fn handle_command(command: &str, calculator: &mut Calculator) -> bool {
    match command {
        "q" | "quit" | "exit" => return true,
        "mode" => {
            calculator.apply(Op::ToggleAngleMode);
            println!("angle mode: {}", calculator.state().angle_mode);
        }
        "clear" => {
            calculator.apply(Op::Clear);
            println!("cleared");
        }
        "history" => {
            if calculator.history().is_empty() {
                println!("no saved calculations");
            }
            for item in calculator.history().items() {
                println!(
                    "{} = {}  {}",
                    item.expression,
                    item.result.bold(),
                    format!("[{}]", item.mode).dimmed()
                );
            }
        }
        "history clear" => {
            calculator.apply(Op::ClearHistory);
            storage::save(calculator.history().items());
            println!("history cleared");
        }
        "help" => {
            println!(":mode           toggle DEG/RAD");
            println!(":clear          reset the calculator");
            println!(":history        list saved calculations");
            println!(":history clear  delete saved calculations");
            println!(":quit           exit");
        }
        other => println!("unknown command :{other} (try :help)"),
    }
    false
}
