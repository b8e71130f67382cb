//! CLI tool to check values and files for Log4Shell payloads.

use std::fs;
use std::process::ExitCode;

use log4shell_detect::looks_like_jndi_injection;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: log4shell-detect <command> [args...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  check <value>...  Classify each value given as an argument");
        eprintln!("  scan <file>...    Scan files line by line for payloads");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  log4shell-detect check '${{jndi:ldap://127.0.0.1/a}}'");
        eprintln!("  log4shell-detect scan access.log");
        eprintln!();
        eprintln!("Exits 0 when clean, 1 when any payload was detected.");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    if rest.is_empty() {
        eprintln!("Error: no values or files specified");
        return ExitCode::from(2);
    }

    match command {
        "check" => check_values(rest),
        "scan" => scan_files(rest),
        _ => {
            eprintln!("Unknown command: {command}");
            ExitCode::from(2)
        }
    }
}

fn check_values(values: &[String]) -> ExitCode {
    let mut detected = false;

    for value in values {
        if looks_like_jndi_injection(value) {
            println!("suspicious: {value}");
            detected = true;
        } else {
            println!("clean: {value}");
        }
    }

    if detected {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn scan_files(files: &[String]) -> ExitCode {
    let mut detected = false;
    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let mut matches = 0usize;
        for (number, line) in content.lines().enumerate() {
            if looks_like_jndi_injection(line) {
                println!("{path}:{}: {line}", number + 1);
                matches += 1;
            }
        }

        if matches > 0 {
            detected = true;
            eprintln!("{path}: {matches} suspicious line(s)");
        } else {
            eprintln!("{path}: clean");
        }
    }

    if had_error {
        ExitCode::from(2)
    } else if detected {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
