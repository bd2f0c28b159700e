use std::{fs, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use comma_calc::{
    ParsedExpression, calculate, parse,
    report::{LineEnding, Stage, format_failure, format_number},
};
use tracing_subscriber::EnvFilter;

/// comma_calc parses and calculates two-operand expressions such as
/// `5,7 / -2`, using `,` as the decimal separator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path to a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Only show the parsed operands and operator, without calculating.
    #[arg(short, long)]
    parse_only: bool,

    /// End error report lines with `\n` instead of `\r\n`.
    #[arg(long)]
    lf: bool,

    contents: String,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let ending = if args.lf { LineEnding::Lf } else { LineEnding::CrLf };

    let source = if args.file {
        fs::read_to_string(&args.contents).with_context(|| {
                                              format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                      args.contents)
                                          })?
    } else {
        args.contents
    };

    let expressions: Vec<&str> = if args.file {
        source.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![source.as_str()]
    };

    let mut failed = false;
    for text in expressions {
        if let Err(report) = run(text, args.parse_only, ending) {
            eprint!("{report}");
            failed = true;
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Parses and, unless `parse_only` is set, calculates one expression.
///
/// Output goes to stdout. A failure is returned as a rendered report.
fn run(text: &str, parse_only: bool, ending: LineEnding) -> Result<(), String> {
    let expr = parse(text).map_err(|e| format_failure(Stage::Parse, &e, ending))?;
    print_fields(&expr);

    if !parse_only {
        let result = calculate(&expr).map_err(|e| format_failure(Stage::Calculate, &e, ending))?;
        println!("result:        {}", format_number(result));
    }
    Ok(())
}

fn print_fields(expr: &ParsedExpression) {
    println!("expression:    {}", expr.source_text());
    println!("left operand:  {}", format_number(expr.left()));
    println!("operator:      {}", expr.operator());
    println!("right operand: {}", format_number(expr.right()));
}
