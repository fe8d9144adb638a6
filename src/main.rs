use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use parencalc::{
    config::{DEFAULT_MAX_CHILDREN, DEFAULT_MAX_DEPTH, Limits},
    interpret,
    interpreter::environment::Environment,
};
use tracing_subscriber::EnvFilter;

/// parencalc evaluates parenthesized arithmetic such as `(+ (* 2 3) 4)`, one
/// expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text printed before each line is read.
    #[arg(short, long, default_value = "» ")]
    prompt: String,

    /// Log the tokens and tree of every line to stderr.
    #[arg(short = 'D', long)]
    debug: bool,

    /// Deepest nesting of parentheses accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Most arguments a single call may receive.
    #[arg(long, default_value_t = DEFAULT_MAX_CHILDREN)]
    max_children: usize,

    /// Evaluate this expression and exit instead of starting the REPL.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.debug);

    let environment = Environment::standard();
    let limits = Limits::default().with_max_depth(args.max_depth)
                                  .with_max_children(args.max_children);

    if let Some(expression) = &args.expression {
        return match interpret(expression, &environment, &limits) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("err: {e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = repl(&args.prompt, &environment, &limits) {
        eprintln!("Error reading input: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// `--debug` forces debug output; otherwise `RUST_LOG` decides, defaulting to
/// warnings only.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .init();
}

/// Reads, evaluates and prints lines until end of input or `:quit`.
///
/// A failing line is reported and the loop moves on; nothing from one line is
/// visible to the next.
fn repl(prompt: &str, environment: &Environment, limits: &Limits) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix(':') {
            match command.trim() {
                "quit" | "q" => break,
                "help" | "h" => print_help(environment),
                other => println!("err: unknown command ':{other}', try :help"),
            }
            continue;
        }

        match interpret(input, environment, limits) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("err: {e}"),
        }
    }

    println!("\nGoodbye ☺");
    Ok(())
}

fn print_help(environment: &Environment) {
    println!("Enter one expression per line, e.g. (+ (* 2 3) 4).");
    println!("Known names: {}", environment.names().join(" "));
    println!("Commands: :help, :quit");
}
