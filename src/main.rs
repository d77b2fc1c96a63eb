use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use mixradix::{DEFAULT_OUTPUT_BASE, evaluate, to_postfix_string};
use tracing::{Level, info};

/// mixradix evaluates arithmetic on numbers written in mixed bases, such as
/// `1010(2) + F(16)`, and prints the result in the base of your choice.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mixradix to read expressions from a file, one per line. Empty
    /// lines and lines starting with `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Base of the printed result, from 2 to 36.
    #[arg(short, long, default_value_t = DEFAULT_OUTPUT_BASE, allow_negative_numbers = true)]
    base: i64,

    /// Also print each expression in postfix order.
    #[arg(short, long)]
    postfix: bool,

    /// Raise the log level on stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or the path of the file with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let expressions: Vec<&str> = if args.file {
        source.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .collect()
    } else {
        vec![source.as_str()]
    };
    info!(count = expressions.len(), base = args.base, "evaluating");

    let mut failed = false;
    for expression in expressions {
        if args.postfix {
            match to_postfix_string(expression) {
                Ok(postfix) => println!("postfix: {postfix}"),
                Err(e) => {
                    eprintln!("{e}");
                    failed = true;
                    continue;
                },
            }
        }
        match evaluate(expression, args.base) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
