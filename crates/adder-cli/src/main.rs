//! Adder CLI
//!
//! Sums two integer operands given on the command line. Without operands it
//! runs a short demonstration of one valid and one invalid call.

use adder_core::{AdderError, sum};
use clap::{Arg, ArgAction, Command};
use std::io::{self, Write};
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() {
    let matches = Command::new("adder")
        .version("0.1.0")
        .about("Add two integers with input validation")
        .arg(
            Arg::new("a")
                .value_name("A")
                .help("First operand")
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("b")
                .value_name("B")
                .help("Second operand")
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let format = if matches.get_flag("json") {
        Format::Json
    } else {
        Format::Text
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let a = matches.get_one::<String>("a").map(String::as_str);
    let b = matches.get_one::<String>("b").map(String::as_str);
    let result = if a.is_none() {
        run_demo(format, &mut out, &mut err)
    } else {
        run_operands(a, b, format, &mut out, &mut err)
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

const DEMO_CALLS: [(&str, &str); 2] = [("10", "20"), ("10", "abc")];

/// Runs the demonstration calls. Their errors are reported, not fatal.
fn run_demo(format: Format, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<i32> {
    for (a, b) in DEMO_CALLS {
        log::debug!("demo call: sum({a:?}, {b:?})");
        report(sum(Some(a), Some(b)), format, out, err)?;
    }
    Ok(0)
}

fn run_operands(
    a: Option<&str>,
    b: Option<&str>,
    format: Format,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<i32> {
    let ok = report(sum(a, b), format, out, err)?;
    Ok(if ok { 0 } else { 1 })
}

/// Writes one result to `out` or `err`. Returns whether it was a success.
fn report(
    result: Result<i32, AdderError>,
    format: Format,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    match result {
        Ok(total) => {
            writeln!(out, "{}", render_sum(total, format))?;
            Ok(true)
        }
        Err(e) => {
            log::debug!("sum failed: {e:?}");
            writeln!(err, "{}", render_error(&e, format))?;
            Ok(false)
        }
    }
}

fn render_sum(total: i32, format: Format) -> String {
    match format {
        Format::Text => format!("The sum is: {total}"),
        Format::Json => serde_json::json!({ "sum": total }).to_string(),
    }
}

fn render_error(error: &AdderError, format: Format) -> String {
    match format {
        Format::Text => format!("Error: {error}"),
        Format::Json => serde_json::json!({
            "error": {
                "kind": error.kind().as_str(),
                "message": error.to_string(),
            }
        })
        .to_string(),
    }
}
