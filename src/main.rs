use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use exprima::interpreter::Interpreter;

/// exprima is an easy to use interpreter for a minimal expression language
/// with variables and user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprima to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to run. When omitted, exprima starts an interactive
    /// session instead.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the script file '{}'. Does this file exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    match exprima::evaluate(&script) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive session until end of input.
///
/// Every line goes to one shared interpreter, so variables and functions
/// stay available for later lines. Errors are printed and the session
/// continues; end of input ends the session cleanly.
fn repl() -> io::Result<()> {
    let mut interpreter = Interpreter::new();

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }

        match interpreter.submit(&input) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
