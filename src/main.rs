use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use reckon::{evaluate_with, options::Options};

/// reckon evaluates arithmetic expressions: numbers, `+ - * /`, unary minus
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat each argument as a file holding one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Ignore anything left over after a complete expression.
    #[arg(short, long)]
    lenient: bool,

    /// Also read literals without digits, such as `.`, as zero. Implies
    /// `--lenient`.
    #[arg(long)]
    permissive: bool,

    /// Abort the process on the first invalid expression instead of reporting
    /// it and moving on.
    #[arg(short, long)]
    abort: bool,

    /// Print results with this many digits after the decimal point.
    #[arg(short, long)]
    precision: Option<usize>,

    /// Expressions to evaluate, or file paths with `--file`. Reads standard
    /// input line by line when empty.
    contents: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = if args.permissive {
        Options::permissive()
    } else if args.lenient {
        Options::lenient()
    } else {
        Options::default()
    };

    let expressions = collect_expressions(&args).unwrap_or_else(|e| {
                                                    eprintln!("{e}");
                                                    std::process::exit(1);
                                                });

    let mut failed = false;
    for expression in &expressions {
        match evaluate_with(expression, &options) {
            Ok(value) => match args.precision {
                Some(digits) => println!("{expression} = {value:.digits$}"),
                None => println!("{expression} = {value}"),
            },
            Err(e) => {
                eprintln!("{expression}: {e}");
                if args.abort {
                    std::process::abort();
                }
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn collect_expressions(args: &Args) -> Result<Vec<String>, String> {
    if args.contents.is_empty() {
        return io::stdin().lock()
                          .lines()
                          .collect::<Result<Vec<_>, _>>()
                          .map(non_blank)
                          .map_err(|e| format!("Failed to read standard input: {e}"));
    }

    if !args.file {
        return Ok(args.contents.clone());
    }

    let mut expressions = Vec::new();
    for path in &args.contents {
        let text = fs::read_to_string(path).map_err(|_| {
                                               format!("Failed to read the input file '{path}'. \
                                                        Perhaps this file does not exist?")
                                           })?;
        expressions.extend(non_blank(text.lines().map(str::to_string).collect()));
    }
    Ok(expressions)
}

fn non_blank(lines: Vec<String>) -> Vec<String> {
    lines.into_iter()
         .filter(|line| !line.trim().is_empty())
         .collect()
}
