//! Tally CLI
//!
//! One-shot script evaluation and a line REPL over the process-wide
//! engine. Set `TALLY_LOG=debug` (or `trace`) to see the internal
//! diagnostics behind contained failures.

use std::io::{BufRead, Write};

use tally_eval::{evaluate, last_result};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("repl") => repl(),
        Some("run") => {
            let Some(script) = args.get(2) else {
                eprintln!("Usage: tally run '<script>'");
                eprintln!();
                eprintln!("Example: tally run 'x=3;y=4;x+y'");
                std::process::exit(1);
            };
            println!("{}", evaluate(script));
        }
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Tally - a small statement-oriented calculator language");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  tally                 Start the REPL");
    eprintln!("  tally repl            Start the REPL");
    eprintln!("  tally run '<script>'  Evaluate a script and print the result");
    eprintln!();
    eprintln!("Inside a script, enter `=!Help` for the language summary.");
}

fn repl() {
    println!("Tally REPL - `=!Help` for the language summary, :quit to exit");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("tally> ");
        if stdout.flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":last" => println!("{}", last_result()),
            script => println!("{}", evaluate(script)),
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
