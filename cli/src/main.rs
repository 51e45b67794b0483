mod keymap;
mod repl;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally::{AngleMode, Engine};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "An interactive scientific calculator.")]
#[command(
    long_about = "Tally evaluates calculator-style expressions: display glyphs, implicit\nmultiplication, degree-mode trigonometry, and postfix operators like ! and %.\nRun it with no arguments for the interactive loop."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one expression and print the result
    ///
    /// Trig arguments are interpreted in degrees unless --rad is given.
    ///
    /// Examples:
    ///   tally eval "sin(30)"
    ///   tally eval "2pi" --rad
    Eval {
        /// Expression in calculator notation
        expression: String,
        /// Interpret trigonometry in radians
        #[arg(long)]
        rad: bool,
    },
    /// Start the interactive calculator (default)
    Repl,
    /// Show the saved calculation history
    History {
        /// Delete all saved entries
        #[arg(long)]
        clear: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Eval { expression, rad }) => eval_command(&expression, rad),
        Some(Commands::History { clear }) => history_command(clear),
        Some(Commands::Repl) | None => repl::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn eval_command(expression: &str, rad: bool) -> Result<()> {
    let mode = if rad { AngleMode::Rad } else { AngleMode::Deg };
    let result = Engine::new().calculate(expression, mode)?;
    println!("{result}");
    Ok(())
}

fn history_command(clear: bool) -> Result<()> {
    if clear {
        storage::save(&[]);
        println!("History cleared");
        return Ok(());
    }

    let items = storage::load();
    if items.is_empty() {
        println!("No saved calculations");
        return Ok(());
    }
    for item in &items {
        println!("{} = {}  [{}]", item.expression, item.result, item.mode);
    }
    Ok(())
}
