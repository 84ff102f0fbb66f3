//! graff: compile and plot single-variable expressions.

use std::io::{self, IsTerminal};

use graffc::commands::{self, split_args, CommandError};
use graffc::reporting::Reporter;

fn main() {
    graffc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("graff {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let (options, positional) = match split_args(&args[2..]) {
        Ok(split) => split,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let is_tty = io::stderr().is_terminal();
    let mut reporter = Reporter::with_color_mode(io::stderr(), options.color_mode(), is_tty);
    let mut out = io::stdout().lock();

    let result = match command {
        "rpn" => {
            require_expressions(&positional, "graff rpn <expr>... [--var=NAME]");
            commands::rpn(&positional, &options, &mut out, &mut reporter)
        }
        "eval" => {
            if positional.len() < 2 {
                eprintln!("Usage: graff eval <expr> <x>... [--var=NAME]");
                std::process::exit(1);
            }
            commands::eval(
                &positional[0],
                &positional[1..],
                &options,
                &mut out,
                &mut reporter,
            )
        }
        "table" => {
            require_expressions(
                &positional,
                "graff table <expr>... [--from=A] [--to=B] [--samples=N]",
            );
            commands::table(&positional, &options, &mut out, &mut reporter)
        }
        "trace" => {
            if positional.is_empty() {
                eprintln!("Usage: graff trace <expr>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --width=N, --height=N     Screen size in pixels (default 800x600)");
                eprintln!("  --x-min=A, --x-max=B      Visible x range (default -10..10)");
                eprintln!("  --y-min=A, --y-max=B      Visible y range (default -7.5..7.5)");
                eprintln!("  --keys=KEYS               Apply navigation keys first (q e w a s d)");
                eprintln!("  --seed=N                  Palette seed");
                eprintln!("  --no-parallel             Trace plots one at a time");
                std::process::exit(1);
            }
            commands::trace(&positional, &options, &mut out, &mut reporter)
        }
        "check" => {
            require_expressions(&positional, "graff check <expr>...");
            commands::check(&positional, &options, &mut out, &mut reporter)
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(()) => {}
        // Already rendered with carets and a summary.
        Err(CommandError::Rejected { .. }) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn require_expressions(positional: &[String], usage: &str) {
    if positional.is_empty() {
        eprintln!("Usage: {usage}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("graff {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: graff <command> [args] [options]");
    println!();
    println!("Commands:");
    println!("  rpn <expr>...          Print each expression in postfix form");
    println!("  eval <expr> <x>...     Evaluate an expression at the given points");
    println!("  table <expr>...        Print a table of samples");
    println!("  trace <expr>...        Print the curve segments for one frame");
    println!("  check <expr>...        Validate expressions and report errors");
    println!("  help                   Show this message");
    println!();
    println!("Options:");
    println!("  --var=NAME             Variable name (default x)");
    println!("  --color=WHEN           Diagnostic colors: auto, always, never");
    println!();
    println!("Expressions use + - * / ^, parentheses, pi, e, and the functions");
    println!("sin cos tan asin acos atan sinh cosh tanh sqrt abs exp log ln floor ceil.");
    println!("Set RUST_LOG (e.g. RUST_LOG=graff_compile=debug) for tracing output.");
}
