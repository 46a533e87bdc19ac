// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::Parser;
use colored::*;
use config::Config;
use rpn::eval::Calculator;
use rpn::print::{format_value, Format};
use rustyline::{error::ReadlineError, DefaultEditor};

#[derive(Parser, Debug)]
#[command(version, about = "A Reverse Polish Notation calculator")]
struct Args {
    /// Evaluate one expression and print the top of the stack.
    #[clap(short, long)]
    exec: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let settings = Config::builder()
        .add_source(config::Environment::with_prefix("RPN"))
        .build()?;

    let mut calculator = Calculator::new();

    // -e evaluates one line non-interactively
    if let Some(line) = args.exec {
        calculator.eval(&line);
        println!("{}", format_value(calculator.peek(), Format::Plain));
        return Ok(());
    }

    println!("{} - a Reverse Polish Notation calculator", "rpn".bold());
    println!(
        "Type {} for the command list, {} or Ctrl+D to exit\n",
        "help".green().bold(),
        "x".red().bold()
    );

    let mut rl = DefaultEditor::new()?;

    let history_file = settings.get::<String>("history").ok();
    if let Some(path) = &history_file {
        // no history yet on the first run
        let _ = rl.load_history(path);
    }

    while calculator.is_running() {
        let prompt = format!("[{}]> ", format_value(calculator.peek(), Format::Plain));

        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                calculator.eval(&line);
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "ERROR:".red().bold(), err);
                break;
            }
        }
    }

    if let Some(path) = &history_file {
        rl.save_history(path)?;
    }

    Ok(())
}
