use name_case::Normalisation;
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "
Usage:
    name_case normalise <name>...
    name_case normalise -
    name_case check <name>...

With the `normalise` command, name_case prints the arguments, joined by
spaces, as a single normalised name. If `-` is the only argument, it instead
reads newline-separated names from stdin and prints one JSON object per line,
with the input, the normalised name, and whether the input was already
normalised.

With the `check` command, name_case prints whether the arguments, joined by
spaces, are already normalised, exiting with status 0 if they are and status
1 if not.

Set RUST_LOG (e.g. RUST_LOG=name_case=trace) to see which path each name
takes.
";

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.split_first() {
        Some((command, rest)) if command == "normalise" && !rest.is_empty() => {
            normalise_mode(rest)
        }
        Some((command, rest)) if command == "check" && !rest.is_empty() => check_mode(rest),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(64);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn normalise_mode(args: &[String]) {
    if args.len() == 1 && args[0] == "-" {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for (i, line) in stdin.lock().lines().enumerate() {
            let input = match line {
                Ok(input) => input,
                Err(e) => {
                    warn!(line = i + 1, error = %e, "stopped reading stdin");
                    break;
                }
            };

            let output = match Normalisation::of(&input).to_json() {
                Ok(json) => json,
                Err(e) => {
                    warn!(line = i + 1, error = %e, "could not serialize result");
                    continue;
                }
            };

            if writeln!(out, "{}", output).is_err() {
                debug!("stdout closed");
                break;
            }
        }
    } else {
        println!("{}", name_case::normalise(args.join(" ").as_str()));
    }
}

fn check_mode(args: &[String]) {
    let name = args.join(" ");
    let normalised = name_case::is_normalised(name.as_str());
    println!("{}", normalised);
    process::exit(if normalised { 0 } else { 1 });
}
