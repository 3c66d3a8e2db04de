//! Selector engine CLI.
//!
//! `sel describe '<selector>'...` prints the English description of
//! each selector; `sel lex '<selector>'` dumps the token stream.

use sel_cache::CachingCompiler;
use sel_parse::SyntaxError;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "describe" => {
            if args.len() < 3 {
                eprintln!("Usage: sel describe <selector>...");
                std::process::exit(1);
            }
            describe_command(&args[2..]);
        }
        "lex" => {
            if args.len() != 3 {
                eprintln!("Usage: sel lex <selector>");
                std::process::exit(1);
            }
            lex_command(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Describe each selector; repeated selectors hit the compile cache.
fn describe_command(selectors: &[String]) {
    tracing::debug!(count = selectors.len(), "describe command");
    let compiler = CachingCompiler::new(sel_describe::describe);
    let mut failed = false;
    for selector in selectors {
        match compiler.compile(selector) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                render_error(selector, &err);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Dump the token stream, one token per line.
fn lex_command(selector: &str) {
    for token in sel_lexer::tokenize(selector) {
        println!("{token:?}");
    }
}

/// Render a syntax error with a caret line under the offending span.
fn render_error(selector: &str, err: &SyntaxError) {
    eprintln!("error[{}]: {}, found {}", err.code, err.message, err.found);
    eprintln!("  {selector}");
    let pad = " ".repeat(err.span.start as usize);
    let width = (err.span.len() as usize).max(1);
    eprintln!("  {pad}{}", "^".repeat(width));
}

fn print_usage() {
    eprintln!("Usage: sel <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  describe <selector>...   Explain what each selector takes");
    eprintln!("  lex <selector>           Dump the token stream");
    eprintln!("  help                     Show this message");
    eprintln!();
    eprintln!("Set SEL_LOG (e.g. SEL_LOG=trace) for pipeline tracing.");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("SEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
