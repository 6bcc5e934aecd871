use std::io::{self, BufRead, Write};

use aplet::{evaluate_line, interpreter::evaluator::core::Environment};
use clap::Parser;

/// aplet is a line-oriented interpreter for a small APL-inspired array
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the prompt.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut env = Environment::new();

    if let Some(expression) = args.expression {
        match evaluate_line(&expression, &mut env) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    prompt();
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };

        if !line.trim().is_empty() {
            match evaluate_line(&line, &mut env) {
                Ok(value) => println!("{value}"),
                Err(e) => eprintln!("{e}"),
            }
        }

        prompt();
    }
}

/// Prints the traditional APL tab prompt.
fn prompt() {
    print!("\t");
    let _ = io::stdout().flush();
}
