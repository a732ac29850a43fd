// src/cli.rs

use std::env;

use crate::config::options::{PageKind, RunOptions};
use crate::runner;

/// Parses the command line and runs one extraction.
///
/// Exit semantics: `Ok` for any completed run, including runs with
/// failed deliveries (the report says so); `Err` only when the browser
/// could not be acquired, navigation fatally failed, or the list's root
/// container never appeared.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = match parse_args()? {
        Some(opts) => opts,
        None => return Ok(()), // --help / --list-pages
    };

    let report = runner::run(&opts)?;

    println!("{}", report.summary());
    for (key, reason) in &report.failed {
        eprintln!("failed [{}]: {}", key, reason);
    }
    Ok(())
}

fn parse_args() -> Result<Option<RunOptions>, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);

    let page = match args.next() {
        Some(p) => match p.as_str() {
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(None);
            }
            "--list-pages" => {
                for kind in PageKind::all() {
                    println!("{}", kind.name());
                }
                return Ok(None);
            }
            name => parse_page(name)?,
        },
        None => {
            eprintln!(include_str!("cli_help.txt"));
            return Err("missing page argument".into());
        }
    };

    let mut opts = RunOptions::new(page);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => opts.url = Some(args.next().ok_or("Missing value for --url")?),
            "--sink" => {
                opts.sink_base = args.next().ok_or("Missing value for --sink")?;
            }
            other => return Err(format!("Unknown arg: {}", other).into()),
        }
    }
    Ok(Some(opts))
}

fn parse_page(name: &str) -> Result<PageKind, Box<dyn std::error::Error>> {
    match name.to_ascii_lowercase().as_str() {
        "bulk-deals" | "deals" => Ok(PageKind::BulkDeals),
        "sast-deals" | "sast" => Ok(PageKind::SastDeals),
        "results" | "qoq" => Ok(PageKind::Results),
        "sectors" => Ok(PageKind::Sectors),
        other => Err(format!("Unknown page: {}", other).into()),
    }
}
