// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use chrono::NaiveDate;

use crate::net::HttpTransport;
use crate::params::{Params, Task};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();

    if env::args().len() == 1 {
        // only program name
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    parse_cli(&mut params)?;

    let transport = HttpTransport::new(params.http_timeout)?;
    let mut progress = CliProgress;
    let summary = runner::run(&params, &transport, Some(&mut progress))?;
    report(&params, &summary);
    Ok(())
}

fn report(params: &Params, summary: &RunSummary) {
    match params.task {
        Task::Scrape => println!(
            "{} snapshots written to {}, {} dates failed (see {})",
            summary.snapshots_written,
            params.save_dir.display(),
            summary.dates_failed,
            params.error_log.display()
        ),
        Task::Consolidate => println!(
            "{} identities written to {}",
            summary.identities,
            params.out_file.display()
        ),
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                params.task = match v.to_ascii_lowercase().as_str() {
                    "scrape" => Task::Scrape,
                    "consolidate" => Task::Consolidate,
                    other => return Err(format!("Unknown task: {}", other).into()),
                };}
            "--from" => {
                let v = args.next().ok_or("Missing value for --from")?;
                params.start = parse_date(&v)?; }
            "--to" => {
                let v = args.next().ok_or("Missing value for --to")?;
                params.end = parse_date(&v)?; }
            "-d" | "--dir" => {
                params.save_dir = PathBuf::from(args.next().ok_or("Missing snapshot dir")?); }
            "-o" | "--out" => {
                params.out_file = PathBuf::from(args.next().ok_or("Missing output path")?); }
            "--error-log" => {
                params.error_log = PathBuf::from(args.next().ok_or("Missing error log path")?); }
            "--retry" => {
                params.fetch_retry = args.next().ok_or("Missing value for --retry")?.parse()?; }
            "--sleep-ms" => {
                let ms: u64 = args.next().ok_or("Missing value for --sleep-ms")?.parse()?;
                params.fetch_sleep = Duration::from_millis(ms); }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.start > params.end {
        return Err(format!("--from {} is after --to {}", params.start, params.end).into());
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

/* ---------------- progress sink ---------------- */

/// Terminal progress: the in-flight date overwrites itself in place, one
/// printed line per resolved member, a final newline to leave the last
/// status visible.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn update_status(&mut self, msg: &str) {
        eprint!("{msg}\r");
    }

    fn finish(&mut self) {
        eprintln!();
    }
}
