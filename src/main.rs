// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use msgmgr::config::{load_config, HandlerFactory};
use msgmgr::{global, Severity};
use std::env;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

const INPUT_FILE: &str = "<stdin>";

/// Initialize `tracing` output on stderr, honouring `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Split an input line into `<severity> <label> <body...>`.
///
/// Blank lines and lines starting with `#` yield `None`.
fn parse_line(line: &str) -> anyhow::Result<Option<(Severity, &str, &str)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.splitn(3, char::is_whitespace);
    let severity: Severity = parts.next().unwrap_or_default().parse()?;
    let Some(label) = parts.next() else {
        bail!("missing label after severity '{}'", severity);
    };
    let body = parts.next().unwrap_or_default().trim_start();
    Ok(Some((severity, label, body)))
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <config.yaml>", args[0]);
        eprintln!("Reads '<severity> <label> <body>' lines from stdin and dispatches them.");
        eprintln!("Example: echo 'warning W001 disk low' | {} configs/handlers.yaml", args[0]);
        std::process::exit(1);
    }

    init_tracing();

    let config = load_config(&args[1]).with_context(|| format!("loading {}", args[1]))?;
    let handlers = HandlerFactory::build_all(&config);
    global::with_manager(|mgr| handlers.iter().try_for_each(|h| mgr.reg_handler(h)))?;

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
        match parse_line(&line) {
            Ok(Some((severity, label, body))) => {
                global::put_msg(INPUT_FILE, line_no, severity, label, body)
            }
            Ok(None) => {}
            Err(e) => eprintln!("line {}: {}", line_no, e),
        }
    }

    let counts = global::with_manager(|mgr| mgr.counts());
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_table_driven() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: Option<(Severity, &'static str, &'static str)>,
        }

        let test_cases = vec![
            TestCase {
                name: "full line",
                input: "warning W001 disk low",
                expected: Some((Severity::Warning, "W001", "disk low")),
            },
            TestCase {
                name: "no body",
                input: "info I1",
                expected: Some((Severity::Info, "I1", "")),
            },
            TestCase {
                name: "blank",
                input: "   ",
                expected: None,
            },
            TestCase {
                name: "comment",
                input: "# error E1 ignored",
                expected: None,
            },
        ];

        for test_case in test_cases {
            let parsed = parse_line(test_case.input).unwrap();
            assert_eq!(parsed, test_case.expected, "Test case '{}' failed", test_case.name);
        }
    }

    #[test]
    fn test_parse_line_rejects_bad_input() {
        assert!(parse_line("fatal X1 boom").is_err());
        assert!(parse_line("error").is_err());
    }
}
