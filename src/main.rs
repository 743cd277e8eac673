use std::io::{self, BufRead, Write};

use calculon::{StandardLibrary, evaluate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calculon evaluates single-line arithmetic, logical and bitwise
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Enables debug logging on stderr (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,

    /// Prints bare results without the banner or the `= ` prefix.
    #[arg(short, long)]
    quiet: bool,

    /// Evaluates this expression and exits instead of reading lines from
    /// standard input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(if args.verbose {
                                                                         "calculon=debug"
                                                                     } else {
                                                                         "calculon=warn"
                                                                     })
                                                  });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let mut context = StandardLibrary::new();

    if let Some(expression) = args.expression {
        match evaluate(&expression, &mut context) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_lines(&mut context, args.quiet) {
        eprintln!("Failed to read standard input: {e}");
        std::process::exit(1);
    }
}

/// Evaluates standard input line by line until it ends. Assignments persist
/// from one line to the next.
fn run_lines(context: &mut StandardLibrary, quiet: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !quiet {
        writeln!(stdout, "calculon {} (end input to quit)", env!("CARGO_PKG_VERSION"))?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match evaluate(&line, context) {
            Ok(value) if quiet => writeln!(stdout, "{value}")?,
            Ok(value) => writeln!(stdout, "= {value}")?,
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }

    Ok(())
}
