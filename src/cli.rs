// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::config::options::{FailurePolicy, RunOptions};
use crate::core::net::HttpClient;
use crate::data::Category;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Prints one line per restaurant as it is scraped.
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }
}

impl Default for ConsoleProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, category: Category, total: usize) {
        self.total += total;
        println!("Found {total} {category} restaurants");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_start(&mut self, name: &str) {
        self.done += 1;
        println!("Scraping {name} ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, name: &str, error: &str) {
        eprintln!("  skipped {name}: {error}");
    }
}

/// Parse args, run, and print the final confirmation.
pub fn run() -> Result<RunSummary> {
    let mut opts = RunOptions::from_env();
    parse_cli(env::args().skip(1), &mut opts).map_err(Error::Usage)?;

    crate::log::init(&opts.log_file);
    tracing::info!(
        out = %opts.out.display(),
        categories = ?opts.ordered_categories(),
        policy = ?opts.policy,
        api_key_set = !opts.api_key.is_empty(),
        "starting run"
    );

    let net = HttpClient::new(opts.timeout)?;
    let mut progress = ConsoleProgress::new();
    let summary = runner::run(&opts, &net, Some(&mut progress))?;

    println!(
        "Data saved to {} ({} restaurants)",
        summary.out.display(),
        summary.restaurants
    );
    Ok(summary)
}

/// Errors for bad input are plain strings; the binary reports them.
pub fn parse_cli<I>(args: I, opts: &mut RunOptions) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                opts.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--only" => {
                let v = args.next().ok_or("Missing value for --only")?;
                opts.categories = parse_categories(&v)?;
            }
            "--keep-going" => opts.policy = FailurePolicy::KeepGoing,
            "--timeout" => {
                let v = args.next().ok_or("Missing value for --timeout")?;
                let secs: u64 = v.parse().map_err(|_| format!("Invalid timeout: {v}"))?;
                if secs == 0 { return Err(s!("Timeout must be at least 1 second")); }
                opts.timeout = Duration::from_secs(secs);
            }
            "--log" => {
                opts.log_file = PathBuf::from(args.next().ok_or("Missing log path")?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}")),
        }
    }
    Ok(())
}

fn parse_categories(s: &str) -> std::result::Result<Vec<Category>, String> {
    let mut out = Vec::new();
    for part in s.split(',') {
        if part.trim().is_empty() { continue; }
        let c = Category::from_label(part).ok_or_else(|| format!("Unknown category: {}", part.trim()))?;
        if !out.contains(&c) { out.push(c); }
    }
    if out.is_empty() {
        return Err(s!("--only needs at least one of lunch, student, cafe"));
    }
    Ok(out)
}
