use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Evaluate flat arithmetic expressions like `10/2*3-1`.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about)]
struct Args {
    /// Expression to evaluate, starts an interactive session if missing
    #[arg(allow_hyphen_values = true)]
    expr: Vec<String>,

    /// Also print the postfix form of each expression
    #[arg(long)]
    rpn: bool,

    /// History file for the interactive session
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Don't load or save history
    #[arg(long)]
    no_history: bool,

    /// More logging, repeat for more (overridden by RUST_LOG)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

mod repl {
    use calculator::{evaluate_expression, format_result, ShuntingParser};

    // whitespace is for humans, the calculator only takes the flat form
    fn compact(input: &str) -> String {
        input.split_whitespace().collect()
    }

    pub fn evalexpr(input: &str, show_rpn: bool) -> bool {
        let input = compact(input);
        if show_rpn {
            match ShuntingParser::parse_str(&input) {
                Err(e) => println!("Parse error: {}", e),
                Ok(rpn) => println!("rpn: {}", rpn.postfix()),
            }
        }
        match evaluate_expression(&input) {
            Err(e) => {
                println!("Error: {}", e);
                false
            }
            Ok(result) => {
                match ShuntingParser::parse_str(&input) {
                    Ok(expr) => println!("{} = {}", expr, format_result(result)),
                    Err(_) => println!("{}", format_result(result)),
                }
                true
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn history_path(args: &Args) -> Option<PathBuf> {
    if args.no_history {
        return None;
    }
    args.history.clone()
        .or_else(|| dirs::home_dir().map(|h| h.join(".calc_history")))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        if !repl::evalexpr(&input, args.rpn) {
            std::process::exit(1);
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = history_path(&args);
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            tracing::info!(path = %path.display(), "no history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::evalexpr(&line, args.rpn);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path)?;
    }
    Ok(())
}
