use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hoagie::{evaluator, parser, reader};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hoagie")]
#[command(about = "HoagieLisp interpreter")]
struct Cli {
    /// Evaluate one expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Print the syntax tree of each input before its value
    #[arg(long)]
    ast: bool,

    /// File to load line history from and save it to
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Only log when asked to, so results stay readable
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Some(expr) = &cli.eval {
        let code = eval_once(&mut io::stdout(), expr, cli.ast)?;
        return Ok(ExitCode::from(code));
    }

    repl(&cli)?;
    Ok(ExitCode::SUCCESS)
}

/// Run the `--eval` expression and return the process exit status
fn eval_once(out: &mut impl Write, expr: &str, show_ast: bool) -> io::Result<u8> {
    Ok(if run_line(out, expr, show_ast)? { 0 } else { 1 })
}

/// Parse, read, evaluate and print one line. Returns whether the line parsed.
fn run_line(out: &mut impl Write, line: &str, show_ast: bool) -> io::Result<bool> {
    match parser::parse(line) {
        Ok(tree) => {
            if show_ast {
                write!(out, "{}", tree)?;
            }
            writeln!(out, "{}", evaluator::eval(reader::read(&tree)))?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "Parse error: {}", e)?;
            Ok(false)
        }
    }
}

fn repl(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nHoagieLisp Version 0.0.0.1");
    println!("Press ctrl-c to exit\n");

    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &cli.history
        && let Err(err) = rl.load_history(path)
    {
        tracing::debug!(path = %path.display(), %err, "no history loaded");
    }

    loop {
        match rl.readline("hoagie> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add the line to history
                let _ = rl.add_history_entry(line);

                // Handle special commands
                match line {
                    ":help" => {
                        print_help();
                        continue;
                    }
                    ":quit" | ":exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {}
                }

                // Parse errors are already reported to the user
                run_line(&mut io::stdout(), line, cli.ast)?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Use Ctrl+D or :quit to exit.");
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &cli.history {
        rl.save_history(path)?;
    }
    Ok(())
}

fn print_help() {
    println!("HoagieLisp Commands:");
    println!("  :help    - Show this help message");
    println!("  :quit    - Exit the interpreter");
    println!("  :exit    - Exit the interpreter");
    println!();
    println!("Syntax:");
    println!("  Numbers: 42, -5, 2.5");
    println!("  S-expressions (evaluated): (+ 1 2)");
    println!("  Q-expressions (quoted): {{1 2 3}}");
    println!();
    println!("Builtins:");
    println!("  Arithmetic: + - * / % ^ min max");
    println!("  Lists: list head tail join cons");
    println!("  Evaluation: eval");
    println!();
    println!("Examples:");
    println!("  + 1 (* 2 3)");
    println!("  head {{1 2 3}}");
    println!("  eval (join {{+}} {{1 2}})");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str, show_ast: bool) -> (bool, String) {
        let mut out = Vec::new();
        let parsed = run_line(&mut out, line, show_ast).unwrap();
        (parsed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_line_prints_value() {
        assert_eq!(run("+ 1 (* 2 3)", false), (true, "7\n".to_string()));
        assert_eq!(run("head {1 2 3}", false), (true, "{1}\n".to_string()));
        assert_eq!(run("", false), (true, "()\n".to_string()));
        // Evaluation errors are values, not failures
        assert_eq!(
            run("/ 1 0", false),
            (true, "Error: Division By Zero!\n".to_string())
        );
    }

    #[test]
    fn test_run_line_reports_parse_errors() {
        assert_eq!(
            run("(+ 1 2", false),
            (false, "Parse error: unexpected end of input\n".to_string())
        );
        assert_eq!(
            run("1 2)", false),
            (false, "Parse error: unexpected ')' at position 3\n".to_string())
        );
    }

    #[test]
    fn test_run_line_with_ast() {
        let (parsed, output) = run("(+ 1 2)", true);
        assert!(parsed);
        let tree = parser::parse("(+ 1 2)").unwrap().to_string();
        assert_eq!(output, format!("{}3\n", tree));
    }

    #[test]
    fn test_eval_once_exit_status() {
        let mut out = Vec::new();
        assert_eq!(eval_once(&mut out, "+ 1 2", false).unwrap(), 0);
        assert_eq!(eval_once(&mut out, "head {}", false).unwrap(), 0);
        assert_eq!(eval_once(&mut out, "{1 2", false).unwrap(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3\nError: Function 'head' passed {}!\nParse error: unexpected end of input\n"
        );
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["hoagie"]).unwrap();
        assert_eq!(cli.eval, None);
        assert!(!cli.ast);
        assert_eq!(cli.history, None);

        let cli = Cli::try_parse_from(["hoagie", "-e", "+ 1 2"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("+ 1 2"));

        let cli = Cli::try_parse_from([
            "hoagie",
            "--eval",
            "head {1}",
            "--ast",
            "--history",
            "/tmp/hoagie_history",
        ])
        .unwrap();
        assert_eq!(cli.eval.as_deref(), Some("head {1}"));
        assert!(cli.ast);
        assert_eq!(cli.history, Some(PathBuf::from("/tmp/hoagie_history")));

        assert!(Cli::try_parse_from(["hoagie", "--eval"]).is_err());
        assert!(Cli::try_parse_from(["hoagie", "--verbose"]).is_err());
    }
}
